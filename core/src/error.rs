use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but the board only has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Preset display label is empty")]
    EmptyDisplay,
    #[error("Unknown game state, expected one of: playing, lost, won")]
    UnknownGameState,
}

pub type Result<T> = core::result::Result<T, SettingsError>;
