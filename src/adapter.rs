use crate::errors::TranslateError;
use futures::future::BoxFuture;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, warn};

/// One translation job, built from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub text: String,
    pub from: String,
    pub to: String,
}

impl Request {
    pub fn new(text: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { text: text.into(), from: from.into(), to: to.into() }
    }
}

/// Something that can turn a [`Request`] into a structured result.
///
/// The value is passed through untouched; the adapter only renders it.
pub trait Translate {
    fn translate<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Result<Value, TranslateError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Translated,
    Failed,
}

pub fn render(value: &Value) -> String {
    // to_string_pretty indents with two spaces
    let mut s = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    s.push('\n');
    s
}

/// Issues the request once and writes the result to `out`, or the failure to `err`.
pub async fn run<T, O, E>(request: &Request, translator: &T, out: &mut O, err: &mut E) -> Outcome
where
    T: Translate + ?Sized,
    O: Write,
    E: Write,
{
    match translator.translate(request).await {
        Ok(value) => {
            debug!("Translation resolved");
            let rendered = render(&value);
            if let Err(e) = out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
                warn!(?e, "Writing result failed");
                return Outcome::Failed;
            }
            Outcome::Translated
        }
        Err(failure) => {
            debug!(%failure, "Translation rejected");
            if let Err(e) = writeln!(err, "{}", failure).and_then(|_| err.flush()) {
                warn!(?e, "Writing diagnostic failed");
            }
            Outcome::Failed
        }
    }
}
