//! Built-in ASCII levels.
//!
//! | Index | Size  | Goal                                  |
//! |-------|-------|---------------------------------------|
//! | 0     | 20×8  | (8, 4), between two bracket walls     |
//! | 1     | 20×10 | (10, 6), sealed inside a walled room  |
//!
//! Level 1 has no route to its goal: an agent exploring it discovers the
//! enclosure and keeps ticking without ever completing.

use super::TrueEnvironment;
use super::ascii;
use super::error::Result;

const LEVELS: [&str; 2] = [
    "
####################
#S.................#
#...####.....####..#
#...#........#.....#
#...#...E....#.....#
#...####.....####..#
#..................#
####################
",
    "
####################
#S.................#
#.......#####......#
#.......#...#......#
#...#####...#####..#
#...#...........#..#
#...#.....E.....#..#
#...#############..#
#..................#
####################
",
];

/// Number of built-in levels.
pub const LEVEL_COUNT: usize = LEVELS.len();

/// Raw ASCII text of a level. The index wraps around.
pub fn level_text(index: usize) -> &'static str {
    LEVELS[index % LEVEL_COUNT]
}

/// Build a level. The index wraps around.
pub fn level(index: usize) -> Result<TrueEnvironment> {
    ascii::parse(level_text(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_all_levels_parse() {
        for i in 0..LEVEL_COUNT {
            let env = level(i).unwrap();
            assert_eq!(env.start(), GridCoord::new(1, 1));
        }
    }

    #[test]
    fn test_level_dimensions() {
        let first = level(0).unwrap();
        assert_eq!((first.width(), first.height()), (20, 8));
        assert_eq!(first.goal(), GridCoord::new(8, 4));

        let second = level(1).unwrap();
        assert_eq!((second.width(), second.height()), (20, 10));
        assert_eq!(second.goal(), GridCoord::new(10, 6));
    }

    #[test]
    fn test_index_wraps() {
        assert_eq!(level(LEVEL_COUNT).unwrap(), level(0).unwrap());
        assert_eq!(level_text(3), level_text(1));
    }
}
