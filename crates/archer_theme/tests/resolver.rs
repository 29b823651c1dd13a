use archer_theme::{
    resolve, resolve_name, ColorRole, Palette, PaletteName, PlatformAppearance, ThemeMode,
    DARK_PALETTE, LIGHT_PALETTE,
};
use pretty_assertions::assert_eq;

#[test]
fn every_input_pair_resolves() {
    for mode in ThemeMode::all() {
        for appearance in PlatformAppearance::all() {
            let palette = resolve(*mode, *appearance);
            assert_eq!(palette.name, resolve_name(*mode, *appearance));
        }
    }
}

#[test]
fn system_follows_only_a_definite_light_signal() {
    assert_eq!(resolve(ThemeMode::System, PlatformAppearance::Light), &LIGHT_PALETTE);
    assert_eq!(resolve(ThemeMode::System, PlatformAppearance::Dark), &DARK_PALETTE);
    assert_eq!(resolve(ThemeMode::System, PlatformAppearance::Unknown), &DARK_PALETTE);
}

#[test]
fn explicit_mode_overrides_platform() {
    for appearance in PlatformAppearance::all() {
        assert_eq!(resolve(ThemeMode::Light, *appearance), &LIGHT_PALETTE, "{appearance:?}");
        assert_eq!(resolve(ThemeMode::Dark, *appearance), &DARK_PALETTE, "{appearance:?}");
    }
}

#[test]
fn system_never_reaches_palette_name() {
    let names: Vec<PaletteName> = ThemeMode::all()
        .iter()
        .flat_map(|m| PlatformAppearance::all().iter().map(move |a| resolve_name(*m, *a)))
        .collect();
    assert!(names
        .iter()
        .all(|n| matches!(n, PaletteName::Dark | PaletteName::Light)));
}

#[test]
fn repeated_calls_return_the_same_palette() {
    for mode in ThemeMode::all() {
        for appearance in PlatformAppearance::all() {
            let first = resolve(*mode, *appearance);
            let second = resolve(*mode, *appearance);
            assert_eq!(first, second);
            assert!(std::ptr::eq(first, second), "{mode:?}/{appearance:?}");
        }
    }
}

#[test]
fn resolved_palettes_carry_app_colors() {
    let dark = resolve(ThemeMode::Dark, PlatformAppearance::Unknown);
    assert_eq!(dark.get(ColorRole::CardAlt).to_string(), "#1a1a1a");
    assert_eq!(dark.get(ColorRole::TextMuted).to_string(), "#666666");

    let light = Palette::for_name(PaletteName::Light);
    assert_eq!(light.get(ColorRole::TextSecondary).to_string(), "#555555");
    assert_eq!(light.get(ColorRole::AccentLight).to_string(), "#ffe5e5");
}
