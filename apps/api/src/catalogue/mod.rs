//! Job catalogue — the source of postings the match engine ranks.
//!
//! `AppState` holds an `Arc<dyn JobProvider>`, chosen at startup:
//! the built-in catalogue by default, or a JSON file via `JOB_CATALOGUE_PATH`.

mod builtin;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::job::JobPosting;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalogue JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate job id '{0}' in catalogue")]
    DuplicateId(String),

    #[error("invalid job '{id}': {reason}")]
    InvalidJob { id: String, reason: String },
}

/// Supplies the job postings to rank. Implement this to plug in a real job
/// source without touching the handlers.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, CatalogueError>;

    async fn find_job(&self, id: &str) -> Result<Option<JobPosting>, CatalogueError> {
        Ok(self.list_jobs().await?.into_iter().find(|job| job.id == id))
    }
}

/// A fixed, in-memory catalogue.
#[derive(Debug, Clone)]
pub struct StaticJobProvider {
    jobs: Vec<JobPosting>,
}

impl StaticJobProvider {
    pub fn new(jobs: Vec<JobPosting>) -> Result<Self, CatalogueError> {
        jobs.iter().try_for_each(validate_job)?;
        ensure_unique_ids(&jobs)?;
        Ok(Self { jobs })
    }

    /// The six sample postings shipped with the service.
    pub fn builtin() -> Self {
        Self {
            jobs: builtin::jobs(),
        }
    }
}

#[async_trait]
impl JobProvider for StaticJobProvider {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, CatalogueError> {
        Ok(self.jobs.clone())
    }
}

/// Catalogue loaded once from a JSON array of postings.
#[derive(Debug, Clone)]
pub struct JsonFileJobProvider {
    inner: StaticJobProvider,
}

impl JsonFileJobProvider {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        debug!("Loading job catalogue from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let jobs: Vec<JobPosting> =
            serde_json::from_str(&raw).map_err(|source| CatalogueError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} jobs from {}", jobs.len(), path.display());
        Ok(Self {
            inner: StaticJobProvider::new(jobs)?,
        })
    }
}

#[async_trait]
impl JobProvider for JsonFileJobProvider {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, CatalogueError> {
        self.inner.list_jobs().await
    }
}

/// A posting needs a non-empty id and a finite score in [0, 1].
fn validate_job(job: &JobPosting) -> Result<(), CatalogueError> {
    if job.id.trim().is_empty() {
        return Err(CatalogueError::InvalidJob {
            id: job.id.clone(),
            reason: format!("missing id (title '{}')", job.title),
        });
    }
    if !job.match_score.is_finite() || !(0.0..=1.0).contains(&job.match_score) {
        return Err(CatalogueError::InvalidJob {
            id: job.id.clone(),
            reason: format!("matchScore {} is outside [0, 1]", job.match_score),
        });
    }
    Ok(())
}

fn ensure_unique_ids(jobs: &[JobPosting]) -> Result<(), CatalogueError> {
    let mut seen = std::collections::HashSet::new();
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            return Err(CatalogueError::DuplicateId(job.id.clone()));
        }
    }
    Ok(())
}
