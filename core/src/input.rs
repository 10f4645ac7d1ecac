use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Compact set of the modifier keys held during an input event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const ALT   = 1;
        const CTRL  = 1 << 1;
        const META  = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

/// Modifier key state at an input event, one value per key.
///
/// Field names serialize the same way browser events expose them
/// (`altKey`, `ctrlKey`, ...), so an event payload can be deserialized
/// directly into `ModifierKeys<bool>`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierKeys<T = bool> {
    pub alt_key: T,
    pub ctrl_key: T,
    pub meta_key: T,
    pub shift_key: T,
}

impl<T> ModifierKeys<T> {
    pub const fn new(alt_key: T, ctrl_key: T, meta_key: T, shift_key: T) -> Self {
        Self {
            alt_key,
            ctrl_key,
            meta_key,
            shift_key,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> ModifierKeys<U> {
        ModifierKeys {
            alt_key: f(self.alt_key),
            ctrl_key: f(self.ctrl_key),
            meta_key: f(self.meta_key),
            shift_key: f(self.shift_key),
        }
    }
}

impl ModifierKeys<bool> {
    pub const NONE: Self = Self::new(false, false, false, false);

    pub const fn any(self) -> bool {
        self.alt_key || self.ctrl_key || self.meta_key || self.shift_key
    }

    pub const fn is_empty(self) -> bool {
        !self.any()
    }
}

impl From<Modifiers> for ModifierKeys<bool> {
    fn from(modifiers: Modifiers) -> Self {
        Self::new(
            modifiers.contains(Modifiers::ALT),
            modifiers.contains(Modifiers::CTRL),
            modifiers.contains(Modifiers::META),
            modifiers.contains(Modifiers::SHIFT),
        )
    }
}

impl From<ModifierKeys<bool>> for Modifiers {
    fn from(keys: ModifierKeys<bool>) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::ALT, keys.alt_key);
        modifiers.set(Modifiers::CTRL, keys.ctrl_key);
        modifiers.set(Modifiers::META, keys.meta_key);
        modifiers.set(Modifiers::SHIFT, keys.shift_key);
        modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_keys_held() {
        assert!(<ModifierKeys>::NONE.is_empty());
        assert!(!<ModifierKeys>::NONE.any());
        assert_eq!(<ModifierKeys>::NONE, ModifierKeys::default());
    }

    #[test]
    fn flags_convert_to_keys_and_back() {
        let flags = Modifiers::CTRL | Modifiers::SHIFT;
        let keys = ModifierKeys::from(flags);

        assert_eq!(keys, ModifierKeys::new(false, true, false, true));
        assert!(keys.any());
        assert_eq!(Modifiers::from(keys), flags);
    }

    #[test]
    fn empty_keys_give_empty_flags() {
        assert_eq!(Modifiers::from(<ModifierKeys>::NONE), Modifiers::empty());
    }

    #[test]
    fn deserializes_event_field_names() {
        let keys: ModifierKeys =
            serde_json::from_str(r#"{"altKey":true,"ctrlKey":false,"metaKey":false,"shiftKey":true}"#)
                .unwrap();

        assert!(keys.alt_key);
        assert!(keys.shift_key);
        assert!(!keys.ctrl_key);
    }

    #[test]
    fn missing_key_is_rejected() {
        let result: Result<ModifierKeys, _> =
            serde_json::from_str(r#"{"altKey":true,"ctrlKey":false,"metaKey":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn map_keeps_key_positions() {
        let labels = ModifierKeys::new(true, false, true, false).map(|held| held as u8);
        assert_eq!(labels, ModifierKeys::new(1u8, 0, 1, 0));
    }
}
