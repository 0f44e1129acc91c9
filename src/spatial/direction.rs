//! The eight unit steps of the pixel grid and the four axes pairing them
//!
//! ```text
//!   UpLeft     Up      UpRight
//!          \   |   /
//!   Left  -- target --  Right
//!          /   |   \
//!   DownLeft  Down   DownRight
//! ```

/// A unit step towards one of the eight neighbouring pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Column - 1
    Left,
    /// Column + 1
    Right,
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Row - 1, column - 1
    UpLeft,
    /// Row + 1, column + 1
    DownRight,
    /// Row + 1, column - 1
    DownLeft,
    /// Row - 1, column + 1
    UpRight,
}

impl Direction {
    /// Every direction, cardinal steps first
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::UpLeft,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
    ];

    /// `[row, col]` offset of a single step
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Left => [0, -1],
            Self::Right => [0, 1],
            Self::Up => [-1, 0],
            Self::Down => [1, 0],
            Self::UpLeft => [-1, -1],
            Self::DownRight => [1, 1],
            Self::DownLeft => [1, -1],
            Self::UpRight => [-1, 1],
        }
    }

    /// The direction pointing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::UpLeft => Self::DownRight,
            Self::DownRight => Self::UpLeft,
            Self::DownLeft => Self::UpRight,
            Self::UpRight => Self::DownLeft,
        }
    }
}

/// A straight line through a pixel, walked in two opposite directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left and right
    Horizontal,
    /// Up and down
    Vertical,
    /// Up-left and down-right
    MainDiagonal,
    /// Down-left and up-right
    AntiDiagonal,
}

impl Axis {
    /// The two directions walked from the centre of the line
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            Self::Horizontal => (Direction::Left, Direction::Right),
            Self::Vertical => (Direction::Up, Direction::Down),
            Self::MainDiagonal => (Direction::UpLeft, Direction::DownRight),
            Self::AntiDiagonal => (Direction::DownLeft, Direction::UpRight),
        }
    }
}
