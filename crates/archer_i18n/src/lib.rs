//! Archer internationalization (i18n)
//!
//! Goals:
//! - A closed set of eight supported languages ([`LanguageCode`])
//! - A persisted language choice ([`LanguageStore`]) that callers await before navigating away
//! - Translation tables injected by the host ([`Catalogs`]), never baked in
//! - Missing-translation policy: current language, then English, then the key itself

mod catalogs;
mod error;
mod language;
mod message;
mod simple;
mod store;

pub use catalogs::Catalogs;
pub use error::I18nError;
pub use language::{normalize_locale, LanguageCode};
pub use message::{ArgValue, Message};
pub use simple::{SimpleCatalog, SimpleParseError};
pub use store::{LanguageStore, DEFAULT_LANGUAGE_KEY};

/// Convenience macro for building a translation key + args as a [`Message`].
///
/// Examples:
/// - `t!("selectLanguage")`
/// - `t!("competition.deleteCompetitionConfirm", { name: competition_name })`
#[macro_export]
macro_rules! t {
    ($id:literal) => {
        $crate::Message::new($id)
    };
    ($id:literal, { $($name:ident : $value:expr),* $(,)? }) => {{
        let mut m = $crate::Message::new($id);
        $(
            m = m.arg(stringify!($name), $value);
        )*
        m
    }};
}
