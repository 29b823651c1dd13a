//! Theme mode, platform appearance and palette names

use archer_core::PreferenceError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The user's theme choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    /// Follow the platform appearance
    System,
}

impl ThemeMode {
    /// Stable id for persistence and selection screens.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    /// Order shown on the selection screen.
    pub fn all() -> &'static [ThemeMode] {
        const MODES: [ThemeMode; 3] = [ThemeMode::Dark, ThemeMode::Light, ThemeMode::System];
        &MODES
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeMode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.id() == s)
            .ok_or_else(|| PreferenceError::invalid("theme mode", s))
    }
}

/// Light/dark signal reported by the operating environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlatformAppearance {
    Light,
    Dark,
    /// The platform gave no signal, or one we could not read
    #[default]
    Unknown,
}

impl PlatformAppearance {
    pub fn all() -> &'static [PlatformAppearance] {
        const ALL: [PlatformAppearance; 3] = [
            PlatformAppearance::Light,
            PlatformAppearance::Dark,
            PlatformAppearance::Unknown,
        ];
        &ALL
    }

    /// Map a host's `"light"`/`"dark"` color scheme string; anything else is unknown.
    pub fn from_scheme_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Unknown,
        }
    }
}

/// A concrete palette. `system` never appears here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteName {
    Dark,
    Light,
}

impl PaletteName {
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl Display for PaletteName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mode_ids_round_trip() {
        for mode in ThemeMode::all() {
            assert_eq!(mode.id().parse::<ThemeMode>().unwrap(), *mode);
        }
    }

    #[test]
    fn unknown_mode_id_is_invalid_argument() {
        let err = "sepia".parse::<ThemeMode>().unwrap_err();
        assert!(matches!(
            err,
            PreferenceError::InvalidArgument { kind: "theme mode", ref value } if value == "sepia"
        ));
        // Ids are exact; no case folding.
        assert!("Dark".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn scheme_names() {
        assert_eq!(PlatformAppearance::from_scheme_name("light"), PlatformAppearance::Light);
        assert_eq!(PlatformAppearance::from_scheme_name(" Dark\n"), PlatformAppearance::Dark);
        assert_eq!(PlatformAppearance::from_scheme_name(""), PlatformAppearance::Unknown);
        assert_eq!(
            PlatformAppearance::from_scheme_name("no-preference"),
            PlatformAppearance::Unknown
        );
    }
}
