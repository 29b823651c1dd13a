//! Desktop appearance detection
//!
//! Best effort only. Any failure to read the environment reports
//! [`PlatformAppearance::Unknown`], which the resolver treats as dark.

use crate::mode::PlatformAppearance;
#[cfg(any(target_os = "macos", target_os = "linux"))]
use std::process::Command;

/// Detect the current desktop light/dark preference
pub fn detect_platform_appearance() -> PlatformAppearance {
    #[cfg(target_os = "macos")]
    {
        detect_macos()
    }

    #[cfg(target_os = "linux")]
    {
        detect_linux()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        PlatformAppearance::Unknown
    }
}

#[cfg(target_os = "linux")]
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).into_owned())
}

/// `AppleInterfaceStyle` only exists while dark mode is on; a failed read
/// means light.
#[cfg(target_os = "macos")]
fn detect_macos() -> PlatformAppearance {
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => {
            match PlatformAppearance::from_scheme_name(&String::from_utf8_lossy(&output.stdout)) {
                PlatformAppearance::Dark => PlatformAppearance::Dark,
                _ => PlatformAppearance::Light,
            }
        }
        Ok(_) => PlatformAppearance::Light,
        Err(_) => PlatformAppearance::Unknown,
    }
}

#[cfg(target_os = "linux")]
fn detect_linux() -> PlatformAppearance {
    let from_color_scheme = command_stdout(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "color-scheme"],
    )
    .map(|s| parse_gnome_color_scheme(&s))
    .unwrap_or_default();
    if from_color_scheme != PlatformAppearance::Unknown {
        return from_color_scheme;
    }

    let from_gtk_theme = command_stdout(
        "gsettings",
        &["get", "org.gnome.desktop.interface", "gtk-theme"],
    )
    .map(|s| parse_gtk_theme_name(&s))
    .unwrap_or_default();
    if from_gtk_theme != PlatformAppearance::Unknown {
        return from_gtk_theme;
    }

    std::env::var("GTK_THEME")
        .map(|s| parse_gtk_theme_name(&s))
        .unwrap_or_default()
}

/// `'prefer-dark'` / `'prefer-light'` / `'default'` as printed by gsettings.
/// `default` carries no preference.
pub fn parse_gnome_color_scheme(raw: &str) -> PlatformAppearance {
    match raw.trim().trim_matches('\'') {
        "prefer-dark" => PlatformAppearance::Dark,
        "prefer-light" => PlatformAppearance::Light,
        _ => PlatformAppearance::Unknown,
    }
}

/// GTK theme names mark dark variants with a `dark` suffix (`Adwaita-dark`,
/// `Yaru:dark`). A named theme without it is a light theme.
pub fn parse_gtk_theme_name(raw: &str) -> PlatformAppearance {
    let name = raw.trim().trim_matches('\'').to_ascii_lowercase();
    if name.is_empty() {
        PlatformAppearance::Unknown
    } else if name.contains("dark") {
        PlatformAppearance::Dark
    } else {
        PlatformAppearance::Light
    }
}
