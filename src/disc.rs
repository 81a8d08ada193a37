use std::fmt;

use crate::error::ConnectError;

/// The colour of a disc, or the absence of one
///
/// `None` is never stored in a board, it only shows up as the result of a
/// query (an empty cell, or "no winner"). Black moves first. Heuristic scores
/// are positive when they favour Black and negative when they favour Red.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(i8)]
pub enum DiscColor {
    Red = -1,
    #[default]
    None = 0,
    Black = 1,
}

impl DiscColor {
    /// The colour playing against this one, `None` stays `None`
    pub fn opponent(self) -> Self {
        match self {
            DiscColor::Red => DiscColor::Black,
            DiscColor::Black => DiscColor::Red,
            DiscColor::None => DiscColor::None,
        }
    }

    pub fn is_definite(self) -> bool {
        self != DiscColor::None
    }

    /// Returns the colour unchanged, or `InvalidColor` for `None`
    pub fn require_definite(self) -> Result<Self, ConnectError> {
        if self.is_definite() {
            Ok(self)
        } else {
            Err(ConnectError::InvalidColor)
        }
    }

    /// +1 for Black, -1 for Red, 0 for `None`
    pub fn sign(self) -> i32 {
        self as i8 as i32
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            DiscColor::Red => 'X',
            DiscColor::Black => 'O',
            DiscColor::None => '.',
        }
    }
}

impl fmt::Display for DiscColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscColor::Red => "Red",
            DiscColor::Black => "Black",
            DiscColor::None => "None",
        };
        f.write_str(name)
    }
}
