use crate::adapter::{Request, Translate};
use crate::config::{Sections, Settings};
use crate::errors::TranslateError;
use crate::languages;
use crate::response::{shape, RawResponse, TranslationResult};
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    sections: Sections,
}

impl GoogleTranslator {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .build()
            .context("Building HTTP client")?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            sections: settings.sections.clone(),
        })
    }

    pub async fn translate_text(&self, text: &str, from: &str, to: &str) -> Result<Value, TranslateError> {
        if !languages::is_supported_source(from) {
            return Err(TranslateError::UnsupportedLanguage(from.to_string()));
        }
        if !languages::is_supported(to) {
            return Err(TranslateError::UnsupportedLanguage(to.to_string()));
        }
        let from = if from == languages::AUTO { from } else { languages::normalize(from) };
        let to = languages::normalize(to);

        if text.trim().is_empty() {
            debug!("Empty input, skipping request");
            // nothing to detect a language from
            let source = (from != languages::AUTO).then_some(from);
            return to_value(TranslationResult::empty(text, source, &self.sections));
        }

        let url = format!("{}/translate_a/single", self.endpoint);
        debug!(%url, from, to, chars = text.chars().count(), "Requesting translation");
        let resp = self
            .client
            .get(&url)
            .query(&self.query(text, from, to))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body = resp.text().await?;
        debug!(bytes = body.len(), "Received response");
        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
        if self.sections.raw {
            return Ok(raw);
        }
        let parsed: RawResponse = serde_json::from_value(raw)
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
        to_value(shape(parsed, text, &self.sections))
    }

    fn query<'a>(&self, text: &'a str, from: &'a str, to: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut q = vec![
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("hl", to),
            ("dj", "1"),
            ("ie", "UTF-8"),
            ("oe", "UTF-8"),
            ("dt", "t"),
            ("dt", "rm"),
        ];
        if self.sections.detailed_translations {
            q.push(("dt", "bd"));
        }
        if self.sections.definitions {
            q.push(("dt", "md"));
        }
        if self.sections.examples {
            q.push(("dt", "ex"));
        }
        if self.sections.synonyms {
            q.push(("dt", "ss"));
        }
        q.push(("q", text));
        q
    }
}

fn to_value(result: TranslationResult) -> Result<Value, TranslateError> {
    serde_json::to_value(result).map_err(|e| TranslateError::MalformedResponse(e.to_string()))
}

impl Translate for GoogleTranslator {
    fn translate<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Value, TranslateError>> {
        self.translate_text(&request.text, &request.from, &request.to).boxed()
    }
}
