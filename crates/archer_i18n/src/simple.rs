use std::collections::HashMap;

use thiserror::Error;

use crate::message::Message;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;
const MAX_EXPANDED_BYTES: usize = 64 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

fn looks_like_yaml_mapping(src: &str) -> bool {
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        // If `=` appears before `:`, it's the legacy `key = value` format.
        if let Some(colon) = line.find(':') {
            match line.find('=') {
                Some(eq) if eq < colon => {}
                _ => return true,
            }
        }
        if line.contains('=') {
            return false;
        }
    }
    false
}

/// A translation table for one language.
///
/// Accepted sources:
/// - YAML mapping (preferred); nested mappings flatten to dotted keys
/// - JSON object in the app's legacy locale layout, flattened the same way;
///   `{{name}}` placeholders are rewritten to `{name}`
/// - Legacy `key = value` lines with `#`/`//` comments and optional quoting
///
/// Placeholders `{name}` are replaced with message args; `{{` and `}}` escape braces.
#[derive(Clone, Debug, Default)]
pub struct SimpleCatalog {
    entries: HashMap<String, String>,
}

impl SimpleCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML mapping, falling back to the legacy key=value format.
    pub fn parse(src: &str) -> Result<Self, SimpleParseError> {
        match serde_yaml::from_str::<serde_yaml::Value>(src) {
            Ok(serde_yaml::Value::Mapping(map)) => {
                let mut cat = Self::new();
                cat.flatten_yaml("", map)?;
                Ok(cat)
            }
            Ok(_) => Self::parse_legacy(src),
            Err(e) if looks_like_yaml_mapping(src) => {
                Err(SimpleParseError::Yaml(format!("yaml parse error: {e}")))
            }
            Err(_) => Self::parse_legacy(src),
        }
    }

    /// Parse a nested JSON locale file.
    pub fn from_json(src: &str) -> Result<Self, SimpleParseError> {
        match serde_json::from_str::<serde_json::Value>(src) {
            Ok(serde_json::Value::Object(map)) => {
                let mut cat = Self::new();
                cat.flatten_json("", map)?;
                Ok(cat)
            }
            Ok(_) => Err(SimpleParseError::Json(
                "top level must be an object".to_string(),
            )),
            Err(e) => Err(SimpleParseError::Json(e.to_string())),
        }
    }

    fn flatten_yaml(&mut self, prefix: &str, map: serde_yaml::Mapping) -> Result<(), SimpleParseError> {
        for (k, v) in map {
            let Some(name) = k.as_str() else {
                return Err(SimpleParseError::Yaml("yaml keys must be strings".to_string()));
            };
            let key = join_key(prefix, name);
            match v {
                serde_yaml::Value::Mapping(nested) => self.flatten_yaml(&key, nested)?,
                serde_yaml::Value::String(s) => self.add_entry(key, s)?,
                _ => {
                    return Err(SimpleParseError::Yaml(format!(
                        "yaml value for key `{key}` must be a string"
                    )))
                }
            }
        }
        Ok(())
    }

    fn flatten_json(
        &mut self,
        prefix: &str,
        map: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), SimpleParseError> {
        for (name, v) in map {
            let key = join_key(prefix, &name);
            match v {
                serde_json::Value::Object(nested) => self.flatten_json(&key, nested)?,
                serde_json::Value::String(s) => self.add_entry(key, from_double_brace(&s))?,
                _ => {
                    return Err(SimpleParseError::Json(format!(
                        "json value for key `{key}` must be a string"
                    )))
                }
            }
        }
        Ok(())
    }

    fn parse_legacy(src: &str) -> Result<Self, SimpleParseError> {
        let mut cat = Self::new();
        for (idx, raw_line) in src.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let syntax = |msg: String| SimpleParseError::Syntax {
                line: line_no,
                msg,
            };

            let Some((key, value)) = line.split_once('=') else {
                return Err(syntax("expected `key = value`".to_string()));
            };
            let key = key.trim();

            // Inline comments only count when preceded by whitespace.
            let mut value = value.trim();
            for marker in [" #", " //"] {
                if let Some(pos) = value.find(marker) {
                    value = value[..pos].trim();
                }
            }
            let value = unquote_and_unescape(value).map_err(syntax)?;

            cat.add_entry(key.to_string(), value).map_err(|e| match e {
                SimpleParseError::Entry { msg, .. } => syntax(msg),
                other => other,
            })?;
        }
        Ok(cat)
    }

    fn add_entry(&mut self, key: String, value: String) -> Result<(), SimpleParseError> {
        let reject = |msg: String| {
            Err(SimpleParseError::Entry {
                key: key.clone(),
                msg,
            })
        };
        if key.is_empty() {
            return reject("empty key".to_string());
        }
        if !is_valid_key(&key) {
            return reject(format!(
                "invalid key `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"
            ));
        }
        if key.len() > MAX_KEY_BYTES {
            return reject(format!("key `{key}` is too long (max {MAX_KEY_BYTES} bytes)"));
        }
        if value.len() > MAX_VALUE_BYTES {
            return reject(format!(
                "value for key `{key}` is too long (max {MAX_VALUE_BYTES} bytes)"
            ));
        }
        if self.entries.len() >= MAX_CATALOG_ENTRIES && !self.entries.contains_key(&key) {
            return reject(format!("too many entries (max {MAX_CATALOG_ENTRIES})"));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    pub fn format_message(&self, msg: &Message) -> Option<String> {
        self.get(msg.id.as_ref()).map(|tmpl| interpolate(tmpl, msg))
    }
}

#[derive(Debug, Error)]
pub enum SimpleParseError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("json catalog error: {0}")]
    Json(String),

    #[error("simple catalog syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("catalog entry `{key}` rejected: {msg}")]
    Entry { key: String, msg: String },
}

fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn unquote_and_unescape(s: &str) -> Result<String, String> {
    let inner = s
        .strip_prefix('"')
        .and_then(|r| r.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|r| r.strip_suffix('\'')));
    let Some(inner) = inner else {
        return Ok(s.to_string());
    };

    let mut out = String::with_capacity(inner.len());
    let mut it = inner.chars();
    while let Some(c) = it.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match it.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            // `\\`, `\"`, `\'` and unknown escapes keep the escaped char.
            Some(other) => out.push(other),
            None => return Err("dangling escape".to_string()),
        }
    }
    Ok(out)
}

/// Rewrite `{{ name }}` placeholders to `{name}`
fn from_double_brace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) if is_valid_key(after[..end].trim()) => {
                out.push('{');
                out.push_str(after[..end].trim());
                out.push('}');
                rest = &after[end + 2..];
            }
            _ => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Output buffer that stops growing at [`MAX_EXPANDED_BYTES`]
struct Limited {
    out: String,
}

impl Limited {
    fn push(&mut self, s: &str) -> bool {
        let room = MAX_EXPANDED_BYTES.saturating_sub(self.out.len());
        if s.len() <= room {
            self.out.push_str(s);
        } else {
            let mut end = room;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            self.out.push_str(&s[..end]);
        }
        self.out.len() >= MAX_EXPANDED_BYTES
    }
}

fn interpolate(tmpl: &str, msg: &Message) -> String {
    if !tmpl.contains(['{', '}']) {
        return tmpl.to_string();
    }

    let mut buf = Limited {
        out: String::with_capacity(std::cmp::min(tmpl.len() + 8, MAX_EXPANDED_BYTES)),
    };
    let mut rest = tmpl;
    while let Some(pos) = rest.find(['{', '}']) {
        let mut full = buf.push(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            full |= buf.push(&tail[..1]);
            rest = &tail[2..];
        } else if tail.starts_with('}') {
            full |= buf.push("}");
            rest = &tail[1..];
        } else if let Some(end) = tail[1..].find('}') {
            let name = tail[1..1 + end].trim();
            let whole = &tail[..end + 2];
            full |= match msg.lookup_arg(name) {
                Some(v) if !name.is_empty() => buf.push(&v.to_string()),
                // Unknown placeholders stay visible.
                _ => buf.push(whole),
            };
            rest = &tail[end + 2..];
        } else {
            // No closing brace: the rest is literal text.
            buf.push(tail);
            return buf.out;
        }

        if full {
            return buf.out;
        }
    }
    buf.push(rest);
    buf.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ArgValue;
    use pretty_assertions::assert_eq;

    fn hello(name: impl Into<ArgValue>) -> Message {
        Message::new("x").arg("name", name)
    }

    #[test]
    fn parse_yaml_and_lookup() {
        let src = r#"
selectLanguage: "Select Language"
greeting: "Hello, {name}!"
"#;

        let cat = SimpleCatalog::parse(src).unwrap();
        assert_eq!(cat.get("selectLanguage"), Some("Select Language"));

        let s = cat
            .format_message(&Message::new("greeting").arg("name", "Robin"))
            .unwrap();
        assert_eq!(s, "Hello, Robin!");
    }

    #[test]
    fn nested_yaml_flattens_to_dotted_keys() {
        let src = r#"
common:
  cancel: Cancel
competition:
  deleteCompetitionConfirm: "Delete {name}?"
  summary:
    title: Summary
"#;
        let cat = SimpleCatalog::parse(src).unwrap();
        assert_eq!(cat.get("common.cancel"), Some("Cancel"));
        assert_eq!(cat.get("competition.summary.title"), Some("Summary"));
        assert_eq!(cat.len(), 3);
    }

    #[test]
    fn parse_legacy_kv_and_lookup() {
        let src = r#"
        # comment
        settings = Settings
        greeting = "Hello, {name}!"   # trailing
        quoted = 'it\'s'
        "#;

        let cat = SimpleCatalog::parse(src).unwrap();
        assert_eq!(cat.get("settings"), Some("Settings"));
        assert_eq!(cat.get("quoted"), Some("it's"));
        assert_eq!(cat.format_message(&Message::new("greeting").arg("name", "Robin")).unwrap(), "Hello, Robin!");
    }

    #[test]
    fn json_locale_file_flattens_and_converts_placeholders() {
        let src = r#"{
            "settings": "Asetukset",
            "competition": { "deleteCompetitionConfirm": "Poistetaanko {{ name }}?" },
            "braces": "{{not a key}}"
        }"#;
        let cat = SimpleCatalog::from_json(src).unwrap();
        assert_eq!(cat.get("settings"), Some("Asetukset"));
        assert_eq!(
            cat.get("competition.deleteCompetitionConfirm"),
            Some("Poistetaanko {name}?")
        );
        assert_eq!(cat.get("braces"), Some("{{not a key}}"));
    }

    #[test]
    fn json_rejects_non_string_leaves() {
        assert!(matches!(
            SimpleCatalog::from_json(r#"{"count": 3}"#),
            Err(SimpleParseError::Json(_))
        ));
        assert!(matches!(
            SimpleCatalog::from_json("[]"),
            Err(SimpleParseError::Json(_))
        ));
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(interpolate("Hello, {{name}}!", &hello("Robin")), "Hello, {name}!");
        assert_eq!(interpolate("{{{name}}}", &hello("Robin")), "{Robin}");
        assert_eq!(interpolate("}}", &hello("Robin")), "}");
        assert_eq!(interpolate("{{", &hello("Robin")), "{");
    }

    #[test]
    fn unknown_and_empty_placeholders_stay_visible() {
        assert_eq!(interpolate("{score}/{max}", &hello("Robin")), "{score}/{max}");
        assert_eq!(interpolate("a{}b", &hello("Robin")), "a{}b");
    }

    #[test]
    fn missing_closing_brace_is_literal() {
        assert_eq!(interpolate("Hello, {name", &hello("Robin")), "Hello, {name");
        assert_eq!(interpolate("{name", &hello("Robin")), "{name");
    }

    #[test]
    fn yaml_requires_string_values() {
        let err = SimpleCatalog::parse("shots: 123\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Yaml(_)));
    }

    #[test]
    fn key_validation() {
        let err = SimpleCatalog::parse("bad key: \"nope\"\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Entry { .. }));

        let err = SimpleCatalog::parse("bad key = nope\n").unwrap_err();
        assert!(matches!(err, SimpleParseError::Syntax { line: 1, .. }));
    }

    #[test]
    fn placeholder_output_is_limited() {
        let big = hello("a".repeat(MAX_EXPANDED_BYTES * 2));
        let s = interpolate("{name}{name}{name}", &big);
        assert_eq!(s.len(), MAX_EXPANDED_BYTES);
    }
}
