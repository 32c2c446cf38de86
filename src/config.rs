use anyhow::{anyhow, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
    pub user_agent: String,
    pub sections: Sections,
}

/// Which parts of the service response end up in the rendered result.
#[derive(Debug, Clone)]
pub struct Sections {
    pub raw: bool,
    pub detailed_translations: bool,
    pub definitions: bool,
    pub examples: bool,
    pub synonyms: bool,
    pub remove_styles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com".to_string(),
            user_agent: format!("rustytranslate/{}", env!("CARGO_PKG_VERSION")),
            sections: Sections::default(),
        }
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            raw: false,
            detailed_translations: true,
            definitions: true,
            examples: true,
            synonyms: true,
            remove_styles: true,
        }
    }
}

pub fn load_settings() -> Result<Settings> {
    Settings::from_lookup(|key| env::var(key).ok())
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Settings::default();
        if let Some(v) = lookup("TRANSLATE_ENDPOINT").filter(|v| !v.trim().is_empty()) {
            cfg.endpoint = v.trim().trim_end_matches('/').to_string();
        }
        if let Some(v) = lookup("TRANSLATE_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            cfg.user_agent = v;
        }

        let flags: [(&str, &mut bool); 6] = [
            ("TRANSLATE_RAW", &mut cfg.sections.raw),
            ("TRANSLATE_DETAILED", &mut cfg.sections.detailed_translations),
            ("TRANSLATE_DEFINITIONS", &mut cfg.sections.definitions),
            ("TRANSLATE_EXAMPLES", &mut cfg.sections.examples),
            ("TRANSLATE_SYNONYMS", &mut cfg.sections.synonyms),
            ("TRANSLATE_REMOVE_STYLES", &mut cfg.sections.remove_styles),
        ];
        for (key, slot) in flags {
            if let Some(v) = lookup(key) {
                *slot = parse_flag(&v).with_context(|| format!("Reading {}", key))?;
            }
        }
        Ok(cfg)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("Expected a boolean, got {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.endpoint, "https://translate.googleapis.com");
        assert!(cfg.user_agent.starts_with("rustytranslate/"));
        assert!(!cfg.sections.raw);
        assert!(cfg.sections.definitions);
        assert!(cfg.sections.remove_styles);
    }

    #[test]
    fn overrides_endpoint_and_flags() {
        let cfg = Settings::from_lookup(lookup_from(&[
            ("TRANSLATE_ENDPOINT", "http://127.0.0.1:8080/"),
            ("TRANSLATE_RAW", "yes"),
            ("TRANSLATE_EXAMPLES", "0"),
            ("TRANSLATE_SYNONYMS", "Off"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint, "http://127.0.0.1:8080");
        assert!(cfg.sections.raw);
        assert!(!cfg.sections.examples);
        assert!(!cfg.sections.synonyms);
        assert!(cfg.sections.detailed_translations);
    }

    #[test]
    fn rejects_garbage_flag() {
        let err = Settings::from_lookup(lookup_from(&[("TRANSLATE_DEFINITIONS", "maybe")]))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("TRANSLATE_DEFINITIONS"));
    }
}
