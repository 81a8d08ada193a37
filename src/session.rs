use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, Print, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect_bot::{bitboard::BitBoard, disc::DiscColor, WIDTH};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Playing,
    RedWin,
    BlackWin,
    Draw,
}

/// A game in progress, as the terminal front end sees it
#[derive(Clone)]
pub struct GameSession {
    board: BitBoard,
    pub to_move: DiscColor,
    pub game: String,
    pub state: GameState,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            board: BitBoard::new(),
            to_move: DiscColor::Black,
            game: String::new(),
            state: GameState::Playing,
        }
    }

    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        if self.state != GameState::Playing {
            return Err(anyhow!("The game is already over"));
        }

        let column = column_one_indexed - 1;
        self.board = self
            .board
            .apply_move(column, self.to_move)
            .map_err(|_| anyhow!("Invalid move, column {} full", column_one_indexed))?;
        self.game.push_str(&column_one_indexed.to_string());

        self.state = match self.board.check_victory()? {
            DiscColor::Red => GameState::RedWin,
            DiscColor::Black => GameState::BlackWin,
            DiscColor::None if self.board.is_full() => GameState::Draw,
            DiscColor::None => GameState::Playing,
        };
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        stdout.queue(Print("\n"))?;
        for line in self.board.to_grid().rows_top_down() {
            for cell in line.iter() {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            DiscColor::Red => Color::Red,
                            DiscColor::Black => Color::Black,
                            DiscColor::None => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(Print("\n"))?;
        }
        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(Print(cols + "\n"))?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
