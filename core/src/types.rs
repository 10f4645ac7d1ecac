use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Two-dimensional pair, used both for board sizes and cell positions.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct XY<T = Coord> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> XY<U> {
        XY {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl XY<Coord> {
    /// Number of cells covered when this pair is read as a board size.
    pub const fn area(self) -> CellCount {
        mult(self.x, self.y)
    }

    pub const fn is_empty(self) -> bool {
        self.x == 0 || self.y == 0
    }
}

impl<T> From<(T, T)> for XY<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<XY<T>> for (T, T) {
    fn from(XY { x, y }: XY<T>) -> Self {
        (x, y)
    }
}

impl<T: fmt::Display> fmt::Display for XY<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
