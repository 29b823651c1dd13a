//! Archer Theme
//!
//! The theme half of the preference layer: a persisted user choice combined
//! with a transient platform signal into one of two static palettes.
//!
//! # Overview
//!
//! - **Theme mode**: [`ThemeMode`] is the user's tri-state choice, persisted by [`ThemeStore`]
//! - **Platform signal**: [`PlatformAppearance`] comes from the host via [`SharedAppearance`]
//!   (or [`detect_platform_appearance`] on desktop)
//! - **Resolver**: [`resolve`] maps `(ThemeMode, PlatformAppearance)` to a `&'static` [`Palette`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use archer_theme::{resolve, PlatformAppearance, ThemeMode, ThemeStore};
//!
//! let store = ThemeStore::load(persister, "archery-settings").await;
//! store.set_theme_mode(ThemeMode::System);
//!
//! let palette = resolve(store.theme_mode(), PlatformAppearance::Light);
//! assert_eq!(palette.background.to_string(), "#f5f5f5");
//! ```
//!
//! # Precedence
//!
//! An explicit `dark` or `light` mode always wins. Only `system` consults the
//! platform, and anything other than a definite `light` signal resolves to
//! the dark palette.

pub mod appearance;
pub mod color;
pub mod mode;
pub mod palette;
pub mod platform;
pub mod resolver;
pub mod store;

#[cfg(feature = "watcher")]
pub mod watcher;

pub use appearance::{AppearanceSource, SharedAppearance, SystemAppearance};
pub use color::Color;
pub use mode::{PaletteName, PlatformAppearance, ThemeMode};
pub use palette::{ColorRole, Palette, DARK_PALETTE, LIGHT_PALETTE};
pub use platform::detect_platform_appearance;
pub use resolver::{resolve, resolve_name};
pub use store::{ThemeStore, DEFAULT_THEME_KEY};

#[cfg(feature = "watcher")]
pub use watcher::{AppearanceWatcher, WatcherConfig};
