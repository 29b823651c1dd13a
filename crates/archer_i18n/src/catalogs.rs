use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::language::LanguageCode;
use crate::message::Message;
use crate::simple::SimpleCatalog;
use crate::I18nError;

/// Translation tables for the supported languages, injected by the host.
///
/// Languages without a table are allowed; lookups for them go straight to the
/// primary language.
#[derive(Clone, Debug, Default)]
pub struct Catalogs {
    tables: HashMap<LanguageCode, SimpleCatalog>,
}

impl Catalogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, lang: LanguageCode, catalog: SimpleCatalog) -> Self {
        self.insert(lang, catalog);
        self
    }

    pub fn insert(&mut self, lang: LanguageCode, catalog: SimpleCatalog) {
        self.tables.insert(lang, catalog);
    }

    pub fn get(&self, lang: LanguageCode) -> Option<&SimpleCatalog> {
        self.tables.get(&lang)
    }

    /// Parse and load a YAML or key=value table
    pub fn load_str(&mut self, lang: LanguageCode, src: &str) -> Result<(), I18nError> {
        let cat = SimpleCatalog::parse(src)?;
        self.insert(lang, cat);
        Ok(())
    }

    /// Parse and load a nested JSON locale file
    pub fn load_json(&mut self, lang: LanguageCode, src: &str) -> Result<(), I18nError> {
        let cat = SimpleCatalog::from_json(src)?;
        self.insert(lang, cat);
        Ok(())
    }

    /// Load every `<code>.yaml`, `<code>.yml` or `<code>.json` file in `dir`.
    ///
    /// Files for unsupported languages are skipped.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, I18nError> {
        let dir = dir.as_ref();
        let io = |path: &Path, source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut catalogs = Self::new();
        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .map_err(|e| io(dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        paths.sort();

        for path in paths {
            let (Some(stem), Some(ext)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.extension().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            let Some(lang) = LanguageCode::from_locale(stem) else {
                debug!("Catalogs::from_dir: skipping {}", path.display());
                continue;
            };
            let src = match ext {
                "yaml" | "yml" | "json" => std::fs::read_to_string(&path).map_err(|e| io(&path, e))?,
                _ => continue,
            };
            if ext == "json" {
                catalogs.load_json(lang, &src)?;
            } else {
                catalogs.load_str(lang, &src)?;
            }
            debug!("Catalogs::from_dir: loaded {} for {}", path.display(), lang);
        }
        Ok(catalogs)
    }

    /// Look `key` up in `lang`, then in the primary language.
    pub fn lookup(&self, lang: LanguageCode, key: &str) -> Option<&str> {
        self.chain(lang).find_map(|cat| cat.get(key))
    }

    /// Format `msg` using the same chain as [`Catalogs::lookup`].
    pub fn format(&self, lang: LanguageCode, msg: &Message) -> Option<String> {
        self.chain(lang).find_map(|cat| cat.format_message(msg))
    }

    fn chain(&self, lang: LanguageCode) -> impl Iterator<Item = &SimpleCatalog> {
        let fallback = (lang != LanguageCode::PRIMARY).then_some(LanguageCode::PRIMARY);
        std::iter::once(lang)
            .chain(fallback)
            .filter_map(move |l| self.tables.get(&l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalogs() -> Catalogs {
        let mut c = Catalogs::new();
        c.load_str(LanguageCode::En, "settings: Settings\nlanguage: Language\n")
            .unwrap();
        c.load_str(LanguageCode::Fi, "settings: Asetukset\n").unwrap();
        c
    }

    #[test]
    fn falls_back_to_primary_language() {
        let c = catalogs();
        assert_eq!(c.lookup(LanguageCode::Fi, "settings"), Some("Asetukset"));
        assert_eq!(c.lookup(LanguageCode::Fi, "language"), Some("Language"));
        assert_eq!(c.lookup(LanguageCode::De, "language"), Some("Language"));
        assert_eq!(c.lookup(LanguageCode::Fi, "nope"), None);
    }

    #[test]
    fn from_dir_loads_supported_languages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"common":{"cancel":"Cancel"}}"#).unwrap();
        std::fs::write(dir.path().join("sv.yaml"), "common:\n  cancel: Avbryt\n").unwrap();
        std::fs::write(dir.path().join("ru.json"), r#"{"common":{"cancel":"Отмена"}}"#).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let c = Catalogs::from_dir(dir.path()).unwrap();
        assert_eq!(c.lookup(LanguageCode::Sv, "common.cancel"), Some("Avbryt"));
        assert_eq!(c.lookup(LanguageCode::Uk, "common.cancel"), Some("Cancel"));
        assert!(c.get(LanguageCode::Sv).is_some());
        assert_eq!(c.tables.len(), 2);
    }

    #[test]
    fn from_dir_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), "{ broken").unwrap();
        assert!(matches!(
            Catalogs::from_dir(dir.path()),
            Err(I18nError::SimpleParse(_))
        ));
    }
}
