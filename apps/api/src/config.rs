use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::matching::jitter::DEFAULT_AMPLITUDE;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const DEFAULT_NLP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Every variable is optional; see `.env.example` for defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalogue file. `None` serves the built-in catalogue.
    pub job_catalogue_path: Option<PathBuf>,
    /// External NLP parser endpoint. `None` uses the mock parser.
    pub nlp_parser_url: Option<String>,
    /// Whole-request timeout for the NLP parser.
    pub nlp_timeout_secs: u64,
    pub match_jitter: f64,
    pub match_seed: Option<u64>,
    /// Rank by freshly computed scores instead of the catalogue's own.
    pub rank_by_computed_score: bool,
    /// Classifier table overrides. `None` keeps the built-in table.
    pub skills_high: Option<Vec<String>>,
    pub skills_medium: Option<Vec<String>>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            job_catalogue_path: None,
            nlp_parser_url: None,
            nlp_timeout_secs: DEFAULT_NLP_TIMEOUT_SECS,
            match_jitter: DEFAULT_AMPLITUDE,
            match_seed: None,
            rank_by_computed_score: false,
            skills_high: None,
            skills_medium: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let match_jitter = match get("MATCH_JITTER") {
            Some(v) => v
                .trim()
                .parse::<f64>()
                .context("MATCH_JITTER must be a number")?,
            None => defaults.match_jitter,
        };
        if !(0.0..=0.5).contains(&match_jitter) {
            bail!("MATCH_JITTER must be between 0 and 0.5, got {match_jitter}");
        }

        let nlp_timeout_secs = match get("NLP_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .context("NLP_TIMEOUT_SECS must be a whole number of seconds")?,
            None => defaults.nlp_timeout_secs,
        };
        if nlp_timeout_secs == 0 {
            bail!("NLP_TIMEOUT_SECS must be at least 1");
        }

        Ok(Config {
            port: match get("PORT") {
                Some(v) => v
                    .trim()
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            job_catalogue_path: get("JOB_CATALOGUE_PATH").map(PathBuf::from),
            nlp_parser_url: get("NLP_PARSER_URL"),
            nlp_timeout_secs,
            match_jitter,
            match_seed: get("MATCH_SEED")
                .map(|v| v.trim().parse::<u64>())
                .transpose()
                .context("MATCH_SEED must be an unsigned integer")?,
            rank_by_computed_score: match get("RANK_BY_COMPUTED_SCORE") {
                Some(v) => parse_bool(&v).context("RANK_BY_COMPUTED_SCORE must be true or false")?,
                None => defaults.rank_by_computed_score,
            },
            skills_high: get("SKILLS_HIGH").map(|v| split_list(&v)),
            skills_medium: get("SKILLS_MEDIUM").map(|v| split_list(&v)),
            max_upload_bytes: match get("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .trim()
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => defaults.max_upload_bytes,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
