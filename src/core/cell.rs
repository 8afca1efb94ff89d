//! Cell types for true environments and belief grids.
//!
//! The same enum serves both layers: the true environment only ever holds
//! `Wall`, `Empty`, `Start` and `End`; the belief grid only ever holds
//! `Unknown`, `Empty` and `Wall`.

use serde::{Deserialize, Serialize};

/// Semantic cell type.
///
/// `Start` and `End` are display markers over an empty cell. Everything
/// that reasons about motion only asks [`CellType::is_wall`] or
/// [`CellType::is_open`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellType {
    /// Never observed (fog of war)
    #[default]
    Unknown = 0,

    /// Observed free space
    Empty = 1,

    /// Observed or true obstacle
    Wall = 2,

    /// Start marker (empty underneath)
    Start = 3,

    /// Goal marker (empty underneath)
    End = 4,
}

impl CellType {
    /// Is this cell an obstacle?
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellType::Wall
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellType::Unknown
    }

    /// Known free space, including the start/goal markers.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, CellType::Empty | CellType::Start | CellType::End)
    }

    /// Collapse display markers onto the state they stand for.
    #[inline]
    pub fn occupancy(self) -> CellType {
        match self {
            CellType::Start | CellType::End => CellType::Empty,
            other => other,
        }
    }

    /// Convert from u8 (storage encoding).
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CellType::Empty,
            2 => CellType::Wall,
            3 => CellType::Start,
            4 => CellType::End,
            _ => CellType::Unknown,
        }
    }

    /// Single character representation, matching the ASCII map format.
    pub fn as_char(self) -> char {
        match self {
            CellType::Unknown => '?',
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Start => 'S',
            CellType::End => 'E',
        }
    }

    /// Parse a map character. `?` is not accepted: true maps have no fog.
    pub fn from_map_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellType::Empty),
            '#' => Some(CellType::Wall),
            'S' => Some(CellType::Start),
            'E' => Some(CellType::End),
            _ => None,
        }
    }

    /// Resolve a new observation against the current belief.
    ///
    /// Walls are permanent: once a cell is `Wall` nothing downgrades it.
    /// Returns the state the cell should hold afterwards.
    #[inline]
    pub fn merged_with(self, observed: CellType) -> CellType {
        match (self, observed.occupancy()) {
            (CellType::Wall, _) => CellType::Wall,
            (_, CellType::Unknown) => self,
            (_, observed) => observed,
        }
    }
}
