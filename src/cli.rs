use crate::adapter::{self, Outcome, Request};
use crate::config::Settings;
use crate::google_client::GoogleTranslator;
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::iter;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rustytranslate",
    about = "Translate text with Google Translate and print the result as JSON",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Text to translate, source language code, target language code
    #[arg(num_args = 0..=3, allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parses the process arguments. Everything after the program name is
    /// positional, including `--` and anything that looks like a flag.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("rustytranslate"));
        Self::try_parse_from(iter::once(bin).chain(iter::once(OsString::from("--"))).chain(args))
    }

    pub fn request(&self) -> Request {
        let mut it = self.args.iter().cloned();
        let text = it.next().unwrap_or_default();
        let from = it.next().unwrap_or_default();
        let to = it.next().unwrap_or_default();
        Request::new(text, from, to)
    }
}

pub async fn handle_translate(cli: Cli, settings: &Settings) -> Result<ExitCode> {
    let translator = GoogleTranslator::new(settings)?;
    let request = cli.request();
    info!(from=%request.from, to=%request.to, "Translating");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = adapter::run(&request, &translator, &mut stdout.lock(), &mut stderr.lock()).await;

    Ok(match outcome {
        Outcome::Translated => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_for(args: &[&str]) -> Request {
        let argv = iter::once("rustytranslate").chain(args.iter().copied());
        Cli::parse_args(argv).unwrap().request()
    }

    #[test]
    fn positional_arguments_in_order() {
        assert_eq!(request_for(&["hello", "en", "es"]), Request::new("hello", "en", "es"));
    }

    #[test]
    fn missing_arguments_become_empty() {
        assert_eq!(request_for(&["hello", "en"]), Request::new("hello", "en", ""));
        assert_eq!(request_for(&[]), Request::new("", "", ""));
    }

    #[test]
    fn text_may_start_with_a_dash() {
        assert_eq!(request_for(&["-ish", "en", "ru"]), Request::new("-ish", "en", "ru"));
    }

    #[test]
    fn help_and_version_are_plain_text() {
        assert_eq!(request_for(&["--help", "en", "es"]), Request::new("--help", "en", "es"));
        assert_eq!(request_for(&["-h", "en", "es"]), Request::new("-h", "en", "es"));
        assert_eq!(request_for(&["-V", "en", "es"]), Request::new("-V", "en", "es"));
        assert_eq!(request_for(&["hello", "en", "--help"]), Request::new("hello", "en", "--help"));
        assert_eq!(request_for(&["hello", "--version", "es"]), Request::new("hello", "--version", "es"));
    }

    #[test]
    fn double_dash_is_kept_as_text() {
        assert_eq!(request_for(&["--", "en", "es"]), Request::new("--", "en", "es"));
        assert_eq!(request_for(&["hello", "--", "es"]), Request::new("hello", "--", "es"));
    }

    #[test]
    fn empty_strings_are_forwarded() {
        assert_eq!(request_for(&["", "en", "es"]), Request::new("", "en", "es"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::parse_args(["rustytranslate", "a", "en", "ru", "extra"]).is_err());
    }
}
