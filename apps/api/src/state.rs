use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::catalogue::{JobProvider, JsonFileJobProvider, StaticJobProvider};
use crate::config::Config;
use crate::matching::classifier::SkillClassifier;
use crate::matching::jitter::{Jitter, NoJitter, UniformJitter};
use crate::parsing::{MockResumeParser, NlpResumeParser, ResumeParser};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Job catalogue. Default: built-in postings. Swap via JOB_CATALOGUE_PATH.
    pub jobs: Arc<dyn JobProvider>,
    /// Resume parser. Default: mock. Swap via NLP_PARSER_URL.
    pub parser: Arc<dyn ResumeParser>,
    pub classifier: Arc<SkillClassifier>,
    pub jitter: Arc<dyn Jitter>,
}

impl AppState {
    /// Wires the collaborators selected by `config`.
    pub fn from_config(config: Config) -> Result<Self> {
        let jobs: Arc<dyn JobProvider> = match &config.job_catalogue_path {
            Some(path) => Arc::new(JsonFileJobProvider::load(path)?),
            None => {
                info!("Using built-in job catalogue");
                Arc::new(StaticJobProvider::builtin())
            }
        };

        let parser: Arc<dyn ResumeParser> = match &config.nlp_parser_url {
            Some(url) => Arc::new(
                NlpResumeParser::new(url.clone(), Duration::from_secs(config.nlp_timeout_secs))
                    .context("Failed to build NLP parser client")?,
            ),
            None => Arc::new(MockResumeParser),
        };
        info!("Resume parser backend: {}", parser.backend());

        let classifier = SkillClassifier::with_overrides(
            config.skills_high.as_deref(),
            config.skills_medium.as_deref(),
        );

        let jitter: Arc<dyn Jitter> = if config.match_jitter == 0.0 {
            Arc::new(NoJitter)
        } else {
            Arc::new(UniformJitter::new(config.match_jitter, config.match_seed))
        };
        info!(
            "Match scoring: jitter ±{}, rank by computed score: {}",
            config.match_jitter, config.rank_by_computed_score
        );

        Ok(AppState {
            config,
            jobs,
            parser,
            classifier: Arc::new(classifier),
            jitter,
        })
    }
}
