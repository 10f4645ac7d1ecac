#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use input::*;
pub use preset::*;
pub use state::*;
pub use types::*;

mod error;
mod input;
mod preset;
mod state;
mod types;

/// Cells needed to guarantee the first reveal is an opening: the revealed
/// cell and its eight neighbors.
const OPENING_CELLS: CellCount = 9;

/// Board size and mine count, the part of [`GameSettings`] a preset stores.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardOptions {
    pub size: XY,
    pub mines: CellCount,
}

impl BoardOptions {
    pub const BEGINNER: Self = Self::new(XY::new(9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new(XY::new(16, 16), 40);
    pub const EXPERT: Self = Self::new(XY::new(30, 16), 99);

    pub const fn new(size: XY, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.area()
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.is_empty() {
            return Err(SettingsError::EmptyBoard);
        }

        let cells = self.total_cells();
        if self.mines > cells {
            return Err(SettingsError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }

        Ok(())
    }

    pub const fn with_first_reveal_open(self, first_reveal_open: bool) -> GameSettings {
        GameSettings::from_options(self, first_reveal_open)
    }
}

/// Everything needed to start a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub size: XY,
    pub mines: CellCount,
    /// Guarantee the first revealed cell has no adjacent mines.
    pub first_reveal_open: bool,
}

impl GameSettings {
    pub const fn new(size: XY, mines: CellCount, first_reveal_open: bool) -> Self {
        Self {
            size,
            mines,
            first_reveal_open,
        }
    }

    /// Builds settings that always pass [`GameSettings::validate`], pulling
    /// each axis into `1..=Coord::MAX` and the mine count into `0..=area`.
    pub fn clamped(size: XY, mines: CellCount, first_reveal_open: bool) -> Self {
        let size = size.map(|axis| axis.clamp(1, Coord::MAX));
        let mines = mines.min(size.area());
        Self::new(size, mines, first_reveal_open)
    }

    pub const fn from_options(options: BoardOptions, first_reveal_open: bool) -> Self {
        Self::new(options.size, options.mines, first_reveal_open)
    }

    pub const fn options(&self) -> BoardOptions {
        BoardOptions::new(self.size, self.mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.size.area()
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<()> {
        self.options().validate()?;

        if self.first_reveal_open && self.safe_cells() < OPENING_CELLS {
            log::warn!(
                "Cannot guarantee an opening on a {} board with {} mines, first reveal may not be open",
                self.size,
                self.mines
            );
        }

        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        BoardOptions::BEGINNER.with_first_reveal_open(true)
    }
}

impl From<GameSettings> for BoardOptions {
    fn from(settings: GameSettings) -> Self {
        settings.options()
    }
}
