use crate::config::Sections;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

// Body of `translate_a/single?...&dj=1`. The service omits whole sections
// freely, so everything defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawResponse {
    pub sentences: Vec<Sentence>,
    pub dict: Vec<DictGroup>,
    pub src: Option<String>,
    pub definitions: Vec<DefinitionGroup>,
    pub examples: Option<ExampleList>,
    pub synsets: Vec<SynsetGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Sentence {
    pub trans: Option<String>,
    pub translit: Option<String>,
    pub src_translit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DictGroup {
    pub pos: String,
    pub entry: Vec<DictEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DictEntry {
    pub word: String,
    pub reverse_translation: Vec<String>,
    pub score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefinitionGroup {
    pub pos: String,
    pub entry: Vec<DefinitionEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefinitionEntry {
    pub gloss: String,
    pub definition_id: Option<String>,
    pub example: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExampleList {
    pub example: Vec<Example>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Example {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SynsetGroup {
    pub entry: Vec<SynsetEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SynsetEntry {
    pub synonym: Vec<String>,
    pub definition_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub word: String,
    pub source_language: Option<String>,
    pub translation: String,
    pub word_transcription: Option<String>,
    pub translation_transcription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<IndexMap<String, Vec<DetailedTranslation>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<IndexMap<String, Vec<Definition>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailedTranslation {
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    pub frequency: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Definition {
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
}

impl TranslationResult {
    /// Result for input with nothing to translate.
    pub fn empty(word: &str, source_language: Option<&str>, sections: &Sections) -> Self {
        Self {
            word: word.to_string(),
            source_language: source_language.map(str::to_string),
            translations: sections.detailed_translations.then(IndexMap::new),
            definitions: sections.definitions.then(IndexMap::new),
            examples: sections.examples.then(Vec::new),
            ..Self::default()
        }
    }
}

pub fn shape(raw: RawResponse, word: &str, sections: &Sections) -> TranslationResult {
    let clean = |s: &str| -> String {
        if sections.remove_styles { MARKUP.replace_all(s, "").into_owned() } else { s.to_string() }
    };

    let mut translation = String::new();
    let mut word_transcription = None;
    let mut translation_transcription = None;
    for sentence in &raw.sentences {
        if let Some(t) = &sentence.trans {
            translation.push_str(t);
        }
        if let Some(t) = sentence.src_translit.as_ref().filter(|t| !t.is_empty()) {
            word_transcription = Some(t.clone());
        }
        if let Some(t) = sentence.translit.as_ref().filter(|t| !t.is_empty()) {
            translation_transcription = Some(t.clone());
        }
    }

    let translations = sections.detailed_translations.then(|| {
        let mut out: IndexMap<String, Vec<DetailedTranslation>> = IndexMap::new();
        for group in &raw.dict {
            let items = out.entry(title_case(&group.pos)).or_default();
            for entry in &group.entry {
                items.push(DetailedTranslation {
                    translation: entry.word.clone(),
                    synonyms: sections.synonyms.then(|| entry.reverse_translation.clone()),
                    frequency: frequency(entry.score),
                });
            }
        }
        out
    });

    let definitions = sections.definitions.then(|| {
        let synonyms_by_id: HashMap<&str, &[String]> = raw
            .synsets
            .iter()
            .flat_map(|g| g.entry.iter())
            .filter_map(|e| e.definition_id.as_deref().map(|id| (id, e.synonym.as_slice())))
            .collect();

        let mut out: IndexMap<String, Vec<Definition>> = IndexMap::new();
        for group in &raw.definitions {
            let items = out.entry(title_case(&group.pos)).or_default();
            for entry in &group.entry {
                let synonyms = if sections.synonyms {
                    entry
                        .definition_id
                        .as_deref()
                        .and_then(|id| synonyms_by_id.get(id))
                        .filter(|s| !s.is_empty())
                        .map(|s| s.to_vec())
                } else {
                    None
                };
                items.push(Definition {
                    definition: clean(&entry.gloss),
                    example: entry.example.as_deref().map(|e| clean(e)),
                    synonyms,
                });
            }
        }
        out
    });

    let examples = sections.examples.then(|| {
        raw.examples
            .as_ref()
            .map(|list| list.example.iter().map(|e| clean(&e.text)).collect::<Vec<_>>())
            .unwrap_or_default()
    });

    TranslationResult {
        word: word.to_string(),
        source_language: raw.src,
        translation,
        word_transcription,
        translation_transcription,
        translations,
        definitions,
        examples,
    }
}

// 3 = common, 2 = uncommon, 1 = rare
fn frequency(score: Option<f64>) -> u8 {
    match score {
        Some(s) if s >= 0.1 => 3,
        Some(s) if s >= 0.001 => 2,
        _ => 1,
    }
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
