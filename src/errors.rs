use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Translation service error {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
