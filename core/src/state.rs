use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Phase of a game session. Transitions are driven by whatever engine owns
/// the board; this type only names the phases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub const ALL: [Self; 3] = [Self::Playing, Self::Lost, Self::Won];

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Lost => "lost",
            Self::Won => "won",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or(SettingsError::UnknownGameState)
    }
}
