use std::env;

use anyhow::Result;

use crate::analysis::tokenizer::Alphabet;

/// Default cap on accepted upload size: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default, so the tool runs with no configuration at all.
pub struct Config {
    /// Hard cap on accepted document size in bytes (GRIST_MAX_UPLOAD_BYTES).
    /// Enforced at the HTTP boundary — larger uploads are rejected with 413
    /// before the pipeline sees them.
    pub max_upload_bytes: usize,
    /// Alphabets the tokenizer accepts (GRIST_ALPHABETS, comma-separated;
    /// default: latin,cyrillic).
    pub alphabets: Vec<Alphabet>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let max_upload_bytes = match env::var("GRIST_MAX_UPLOAD_BYTES") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => anyhow::bail!(
                    "GRIST_MAX_UPLOAD_BYTES must be a positive integer, got {raw:?}"
                ),
            },
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let alphabets = match env::var("GRIST_ALPHABETS") {
            Ok(raw) => Alphabet::parse_list(&raw)?,
            Err(_) => Alphabet::DEFAULT.to_vec(),
        };

        Ok(Self {
            max_upload_bytes,
            alphabets,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            alphabets: Alphabet::DEFAULT.to_vec(),
        }
    }
}
