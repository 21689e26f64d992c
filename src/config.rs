use std::env;

use anyhow::Result;

/// How many sentences the CLI keeps when no flag is given.
///
/// Deliberately one more than the library's own default: a three-sentence
/// summary still reads as a paragraph for the short documents the CLI
/// typically sees.
pub const CLI_DEFAULT_SENTENCE_COUNT: usize = 3;

/// Central configuration loaded from environment variables.
///
/// Every field has a default, so the CLI works with no environment at all.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Summary length used when --sentences is not passed
    pub sentence_count: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// GIST_SENTENCES overrides the default summary length for every run
    /// without retyping the flag.
    pub fn load() -> Result<Self> {
        let sentence_count = match env::var("GIST_SENTENCES") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) => n,
                Err(_) => anyhow::bail!(
                    "GIST_SENTENCES must be a non-negative integer, got '{raw}'.\n\
                     Fix or unset it in your environment or .env file."
                ),
            },
            Err(_) => CLI_DEFAULT_SENTENCE_COUNT,
        };

        Ok(Self { sentence_count })
    }
}
