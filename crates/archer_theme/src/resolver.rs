//! Theme resolution
//!
//! Pure and synchronous; safe to call on every frame. Palettes are statics, so
//! identical inputs always yield the same reference and consumers can skip
//! re-rendering on pointer equality.

use crate::mode::{PaletteName, PlatformAppearance, ThemeMode};
use crate::palette::Palette;

/// Pick the concrete palette name for a mode and platform signal.
///
/// `system` follows the platform only when it definitely reports light.
pub fn resolve_name(mode: ThemeMode, appearance: PlatformAppearance) -> PaletteName {
    match mode {
        ThemeMode::Dark => PaletteName::Dark,
        ThemeMode::Light => PaletteName::Light,
        ThemeMode::System => match appearance {
            PlatformAppearance::Light => PaletteName::Light,
            PlatformAppearance::Dark | PlatformAppearance::Unknown => PaletteName::Dark,
        },
    }
}

/// Resolve the palette to present
pub fn resolve(mode: ThemeMode, appearance: PlatformAppearance) -> &'static Palette {
    Palette::for_name(resolve_name(mode, appearance))
}
