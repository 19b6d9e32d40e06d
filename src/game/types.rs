//! Board coordinate types
//!
//! [`Square`] is the only coordinate the game logic speaks. File 0 is the
//! 'a' file and rank 0 is White's back rank, so White pawns advance towards
//! increasing rank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of files (and ranks) on the board
pub const BOARD_DIM: u8 = 8;

/// Board square position (file, rank), both in `0..8`
///
/// Construction is checked, so a `Square` value is always on the board.
/// Serialized as a `[file, rank]` pair that is bounds-checked on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square from file and rank indices, `None` if off-board
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let e4 = Square::new(4, 3).unwrap();
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        (file < BOARD_DIM && rank < BOARD_DIM).then_some(Square { file, rank })
    }

    /// Unchecked constructor for tables known to be in range
    pub(crate) const fn from_raw(file: u8, rank: u8) -> Self {
        Square { file, rank }
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Square reached by moving `df` files and `dr` ranks, `None` off the edge
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if !(0..BOARD_DIM as i8).contains(&file) || !(0..BOARD_DIM as i8).contains(&rank) {
            return None;
        }
        Some(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let file = match file_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return None,
        };
        let rank = match rank_char.to_digit(10)? {
            n @ 1..=8 => n as u8 - 1,
            _ => return None,
        };
        Square::new(file, rank)
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, self.rank + 1)
    }

    /// Iterate over all 64 squares, rank by rank from White's side
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_DIM).flat_map(|rank| (0..BOARD_DIM).map(move |file| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

/// Error returned when a string is not a square name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a square (expected a1..h8)")]
pub struct ParseSquareError(pub String);

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = ParseSquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(file, rank).ok_or_else(|| ParseSquareError(format!("({file}, {rank})")))
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.file, square.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn test_square_algebraic() {
        let square = Square::from_algebraic("e4").unwrap();
        assert_eq!(square.file(), 4);
        assert_eq!(square.rank(), 3);
        assert_eq!(square.to_algebraic(), "e4");

        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!((a1.file(), a1.rank()), (0, 0));

        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("e44").is_none());
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let h8 = Square::from_algebraic("h8").unwrap();
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-1, -1), Square::new(6, 6));

        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(2, 1), Square::new(2, 1));
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a1");
        assert_eq!(squares[63].to_string(), "h8");
    }

    #[test]
    fn test_serde_rejects_off_board() {
        let e4 = Square::new(4, 3).unwrap();
        assert_eq!(serde_json::to_string(&e4).unwrap(), "[4,3]");
        assert_eq!(serde_json::from_str::<Square>("[4,3]").unwrap(), e4);

        assert!(serde_json::from_str::<Square>("[9,0]").is_err());
        assert!(serde_json::from_str::<Square>("[0,200]").is_err());
        assert!(serde_json::from_str::<Square>(r#"{"file":9,"rank":0}"#).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("d5".parse::<Square>().unwrap(), Square::new(3, 4).unwrap());
        assert!("z9".parse::<Square>().is_err());
    }
}
