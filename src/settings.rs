//! App settings: independent flags over key-value persistence.
//!
//! Each setting lives under its own storage key, is read on load and written
//! on change, and has no relationship to the task list except the shared
//! bulk "clear all data" operation.

use crate::error::{Error, Result};
use crate::storage::keys;
use crate::traits::{BiometricProbe, KeyValueStore};
use serde_json::{json, Value};

/// Display font size choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FontSize {
    /// Small text (14pt).
    Small = 0,
    /// Medium text (18pt, default).
    #[default]
    Medium = 1,
    /// Large text (22pt).
    Large = 2,
}

impl FontSize {
    /// Create a font size from its stored index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is greater than 2.
    pub const fn from_index(index: u8) -> std::result::Result<Self, InvalidIndex> {
        match index {
            0 => Ok(Self::Small),
            1 => Ok(Self::Medium),
            2 => Ok(Self::Large),
            _ => Err(InvalidIndex(index)),
        }
    }

    /// Get the stored index of the font size.
    #[must_use]
    pub const fn as_index(self) -> u8 {
        self as u8
    }

    /// Point size used when rendering at this setting.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Small => 14,
            Self::Medium => 18,
            Self::Large => 22,
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        };
        write!(f, "{name}")
    }
}

/// App theme choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Theme {
    /// Always light.
    Light = 0,
    /// Always dark.
    Dark = 1,
    /// Follow the system appearance (default).
    #[default]
    System = 2,
}

impl Theme {
    /// Create a theme from its stored index.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is greater than 2.
    pub const fn from_index(index: u8) -> std::result::Result<Self, InvalidIndex> {
        match index {
            0 => Ok(Self::Light),
            1 => Ok(Self::Dark),
            2 => Ok(Self::System),
            _ => Err(InvalidIndex(index)),
        }
    }

    /// Get the stored index of the theme.
    #[must_use]
    pub const fn as_index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        };
        write!(f, "{name}")
    }
}

/// Error when an invalid setting index is provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIndex(pub u8);

impl std::fmt::Display for InvalidIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid setting index: {} (must be 0-2)", self.0)
    }
}

impl std::error::Error for InvalidIndex {}

/// Store for the independent settings flags.
///
/// A missing or malformed stored value always reads as the default: dark
/// mode off, notifications off, Medium font, System theme, biometrics off.
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Create a settings store over the given key-value store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying key-value store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.store
    }

    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self.store.get(key)?.as_ref().and_then(Value::as_bool).unwrap_or(false))
    }

    fn get_index(&self, key: &str) -> Result<Option<u8>> {
        Ok(self
            .store
            .get(key)?
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|i| u8::try_from(i).ok()))
    }

    /// Whether dark mode is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn dark_mode_enabled(&self) -> Result<bool> {
        self.get_bool(keys::DARK_MODE_ENABLED)
    }

    /// Enable or disable dark mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn set_dark_mode_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set(keys::DARK_MODE_ENABLED, json!(enabled))
    }

    /// Whether notifications are enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn notifications_enabled(&self) -> Result<bool> {
        self.get_bool(keys::NOTIFICATIONS_ENABLED)
    }

    /// Enable or disable notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn set_notifications_enabled(&self, enabled: bool) -> Result<()> {
        self.store.set(keys::NOTIFICATIONS_ENABLED, json!(enabled))
    }

    /// The selected font size.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn font_size(&self) -> Result<FontSize> {
        Ok(self
            .get_index(keys::FONT_SIZE_INDEX)?
            .and_then(|i| FontSize::from_index(i).ok())
            .unwrap_or_default())
    }

    /// Select a font size.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn set_font_size(&self, size: FontSize) -> Result<()> {
        self.store.set(keys::FONT_SIZE_INDEX, json!(size.as_index()))
    }

    /// The selected theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn theme(&self) -> Result<Theme> {
        Ok(self
            .get_index(keys::THEME_INDEX)?
            .and_then(|i| Theme::from_index(i).ok())
            .unwrap_or_default())
    }

    /// Select a theme.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(keys::THEME_INDEX, json!(theme.as_index()))
    }

    /// Whether the biometric lock is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn biometric_enabled(&self) -> Result<bool> {
        self.get_bool(keys::BIOMETRIC_ENABLED)
    }

    /// Enable or disable the biometric lock.
    ///
    /// The probe is consulted on every change. When biometrics are
    /// unavailable the stored flag is forced to false and the request is
    /// rejected, regardless of direction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BiometricsUnavailable`] when the probe reports no
    /// capability, or an error if the underlying store fails.
    pub fn set_biometric_enabled(&self, probe: &dyn BiometricProbe, enabled: bool) -> Result<()> {
        if !probe.biometrics_available() {
            self.store.set(keys::BIOMETRIC_ENABLED, json!(false))?;
            return Err(Error::BiometricsUnavailable);
        }

        self.store.set(keys::BIOMETRIC_ENABLED, json!(enabled))
    }

    /// Wipe the entire key-value store: every setting and the task list.
    ///
    /// Every flag reads as its default afterwards. Confirmation for this
    /// destructive action is a boundary concern; the store itself does not
    /// prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn clear_all_data(&self) -> Result<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryKvStore, MockBiometricProbe};
    use serde_json::json;

    fn create_test_store() -> SettingsStore<MemoryKvStore> {
        SettingsStore::new(MemoryKvStore::new())
    }

    #[test]
    fn test_defaults_when_nothing_persisted() {
        let settings = create_test_store();

        assert!(!settings.dark_mode_enabled().unwrap());
        assert!(!settings.notifications_enabled().unwrap());
        assert_eq!(settings.font_size().unwrap(), FontSize::Medium);
        assert_eq!(settings.theme().unwrap(), Theme::System);
        assert!(!settings.biometric_enabled().unwrap());
    }

    #[test]
    fn test_bool_flags_round_trip() {
        let settings = create_test_store();

        settings.set_dark_mode_enabled(true).unwrap();
        assert!(settings.dark_mode_enabled().unwrap());
        settings.set_dark_mode_enabled(false).unwrap();
        assert!(!settings.dark_mode_enabled().unwrap());

        settings.set_notifications_enabled(true).unwrap();
        assert!(settings.notifications_enabled().unwrap());
    }

    #[test]
    fn test_font_size_round_trip() {
        let settings = create_test_store();

        settings.set_font_size(FontSize::Large).unwrap();
        assert_eq!(settings.font_size().unwrap(), FontSize::Large);

        // Stored as its index, per the external key table
        assert_eq!(settings.storage().get(keys::FONT_SIZE_INDEX).unwrap(), Some(json!(2)));
    }

    #[test]
    fn test_theme_round_trip() {
        let settings = create_test_store();

        settings.set_theme(Theme::Dark).unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::Dark);
        assert_eq!(settings.storage().get(keys::THEME_INDEX).unwrap(), Some(json!(1)));
    }

    #[test]
    fn test_invalid_stored_index_reads_as_default() {
        let settings = create_test_store();

        settings.storage().set(keys::FONT_SIZE_INDEX, json!(7)).unwrap();
        assert_eq!(settings.font_size().unwrap(), FontSize::Medium);

        settings.storage().set(keys::THEME_INDEX, json!("dark")).unwrap();
        assert_eq!(settings.theme().unwrap(), Theme::System);
    }

    #[test]
    fn test_biometric_enable_with_capability() {
        let settings = create_test_store();
        let probe = MockBiometricProbe::available();

        settings.set_biometric_enabled(&probe, true).unwrap();
        assert!(settings.biometric_enabled().unwrap());

        settings.set_biometric_enabled(&probe, false).unwrap();
        assert!(!settings.biometric_enabled().unwrap());
    }

    #[test]
    fn test_biometric_enable_without_capability() {
        let settings = create_test_store();
        let probe = MockBiometricProbe::unavailable();

        let err = settings.set_biometric_enabled(&probe, true).unwrap_err();
        assert!(matches!(err, Error::BiometricsUnavailable));
        assert!(!settings.biometric_enabled().unwrap());
    }

    #[test]
    fn test_biometric_unavailable_forces_flag_off() {
        let settings = create_test_store();

        settings.set_biometric_enabled(&MockBiometricProbe::available(), true).unwrap();
        assert!(settings.biometric_enabled().unwrap());

        // Capability lost: even a disable request snaps the flag off first
        let err = settings
            .set_biometric_enabled(&MockBiometricProbe::unavailable(), false)
            .unwrap_err();
        assert!(matches!(err, Error::BiometricsUnavailable));
        assert!(!settings.biometric_enabled().unwrap());
    }

    #[test]
    fn test_clear_all_data_resets_to_defaults() {
        let settings = create_test_store();

        settings.set_dark_mode_enabled(true).unwrap();
        settings.set_font_size(FontSize::Large).unwrap();
        settings.set_theme(Theme::Light).unwrap();
        settings.storage().set(keys::TASKS, json!(["a task line"])).unwrap();

        settings.clear_all_data().unwrap();

        assert!(!settings.dark_mode_enabled().unwrap());
        assert_eq!(settings.font_size().unwrap(), FontSize::Medium);
        assert_eq!(settings.theme().unwrap(), Theme::System);
        assert!(settings.storage().get(keys::TASKS).unwrap().is_none());
    }

    #[test]
    fn test_font_size_points() {
        assert_eq!(FontSize::Small.points(), 14);
        assert_eq!(FontSize::Medium.points(), 18);
        assert_eq!(FontSize::Large.points(), 22);
    }

    #[test]
    fn test_index_conversions() {
        assert_eq!(FontSize::from_index(0).unwrap(), FontSize::Small);
        assert_eq!(FontSize::from_index(2).unwrap(), FontSize::Large);
        assert!(FontSize::from_index(3).is_err());
        assert_eq!(Theme::from_index(1).unwrap(), Theme::Dark);
        assert!(Theme::from_index(3).is_err());
        assert_eq!(Theme::System.as_index(), 2);
    }
}
