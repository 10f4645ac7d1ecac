use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

const BUILTIN_PRESETS: &[(&str, BoardOptions)] = &[
    ("Beginner", BoardOptions::BEGINNER),
    ("Intermediate", BoardOptions::INTERMEDIATE),
    ("Expert", BoardOptions::EXPERT),
];

/// Named board options a player can pick from a list.
///
/// The first-reveal flag is not part of [`BoardOptions`]; it is chosen when
/// the preset is turned into [`GameSettings`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettingsPreset {
    pub options: BoardOptions,
    pub display: String,
}

impl SettingsPreset {
    pub fn new(display: impl Into<String>, options: BoardOptions) -> Result<Self> {
        let preset = Self {
            options,
            display: display.into(),
        };
        preset.validate()?;
        Ok(preset)
    }

    /// Classic Beginner, Intermediate and Expert boards.
    pub fn builtin() -> Vec<Self> {
        BUILTIN_PRESETS
            .iter()
            .map(|&(display, options)| Self {
                options,
                display: display.into(),
            })
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.trim().is_empty() {
            return Err(SettingsError::EmptyDisplay);
        }
        self.options.validate()
    }

    pub fn settings(&self, first_reveal_open: bool) -> GameSettings {
        self.options.with_first_reveal_open(first_reveal_open)
    }

    pub fn matches(&self, settings: &GameSettings) -> bool {
        self.options == settings.options()
    }
}

/// Looks a preset up by its label, ignoring ASCII case and surrounding whitespace.
pub fn find_preset<'a>(presets: &'a [SettingsPreset], display: &str) -> Option<&'a SettingsPreset> {
    let display = display.trim();
    presets
        .iter()
        .find(|preset| preset.display.trim().eq_ignore_ascii_case(display))
}

/// First preset whose board matches `settings`, if any.
pub fn preset_for<'a>(
    presets: &'a [SettingsPreset],
    settings: &GameSettings,
) -> Option<&'a SettingsPreset> {
    presets.iter().find(|preset| preset.matches(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intermediate_preset_deserializes() {
        let preset: SettingsPreset = serde_json::from_str(
            r#"{ "options": { "size": { "x": 16, "y": 16 }, "mines": 40 }, "display": "Intermediate" }"#,
        )
        .unwrap();

        assert_eq!(preset.options, BoardOptions::INTERMEDIATE);
        assert_eq!(preset.display, "Intermediate");
        assert_eq!(preset.validate(), Ok(()));
    }

    #[test]
    fn first_reveal_flag_inside_options_is_rejected() {
        let result = serde_json::from_str::<SettingsPreset>(
            r#"{
                "options": { "size": { "x": 16, "y": 16 }, "mines": 40, "firstRevealOpen": true },
                "display": "Intermediate"
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn serialized_options_have_no_first_reveal_flag() {
        let preset = &SettingsPreset::builtin()[0];
        let json = serde_json::to_value(preset).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "options": { "size": { "x": 9, "y": 9 }, "mines": 10 },
                "display": "Beginner",
            })
        );
    }

    #[test]
    fn builtin_presets_are_valid() {
        let presets = SettingsPreset::builtin();

        assert_eq!(presets.len(), 3);
        for preset in &presets {
            assert_eq!(preset.validate(), Ok(()), "{}", preset.display);
        }
    }

    #[test]
    fn new_rejects_blank_display() {
        assert_eq!(
            SettingsPreset::new("  ", BoardOptions::BEGINNER),
            Err(SettingsError::EmptyDisplay)
        );
    }

    #[test]
    fn new_rejects_invalid_options() {
        assert_eq!(
            SettingsPreset::new("Crowded", BoardOptions::new(XY::new(2, 2), 5)),
            Err(SettingsError::TooManyMines { mines: 5, cells: 4 })
        );
    }

    #[test]
    fn settings_pick_up_first_reveal_flag() {
        let preset = SettingsPreset::new("Expert", BoardOptions::EXPERT).unwrap();

        let settings = preset.settings(false);
        assert_eq!(settings, GameSettings::new(XY::new(30, 16), 99, false));
        assert!(preset.matches(&settings));
        assert!(preset.matches(&preset.settings(true)));
    }

    #[test]
    fn find_preset_ignores_case_and_padding() {
        let presets = SettingsPreset::builtin();

        let found = find_preset(&presets, " expert ").unwrap();
        assert_eq!(found.options, BoardOptions::EXPERT);
        assert!(find_preset(&presets, "impossible").is_none());
    }

    #[test]
    fn preset_for_identifies_matching_board() {
        let presets = SettingsPreset::builtin();

        let settings = BoardOptions::INTERMEDIATE.with_first_reveal_open(false);
        assert_eq!(
            preset_for(&presets, &settings).map(|p| p.display.as_str()),
            Some("Intermediate")
        );

        let custom = GameSettings::new(XY::new(10, 10), 10, true);
        assert!(preset_for(&presets, &custom).is_none());
    }
}
