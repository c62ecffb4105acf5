//! `InMemoryJobRepository` — a test double for `JobRepository`.
//!
//! Keeps listings in a `Vec` so tests and store-free callers can exercise
//! the same contract as the MongoDB implementation: not-found on get and
//! update, idempotent delete, insertion order on fetch-all.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{DeleteJobResponse, JobListing, JobListingUpdate, NewJobListing};
use crate::repository::{parse_job_id, JobRepository};
use crate::DbError;

#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: Mutex<Vec<JobListing>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with listings that already carry ids.
    pub fn with_jobs(jobs: Vec<JobListing>) -> Self {
        Self {
            jobs: Mutex::new(jobs),
        }
    }

    /// Number of listings currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<JobListing>> {
        // No operation leaves the Vec half-updated, so a poisoned lock is still usable.
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError> {
        let oid = parse_job_id(id)?;
        self.lock()
            .iter()
            .find(|job| job.id == oid)
            .cloned()
            .ok_or_else(|| DbError::NotFound(oid.to_hex()))
    }

    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError> {
        Ok(self.lock().clone())
    }

    async fn create_job_listing(&self, input: NewJobListing) -> Result<JobListing, DbError> {
        let job = JobListing {
            id: ObjectId::new(),
            title: input.title,
            description: input.description,
            url: input.url,
            company: input.company,
        };
        self.lock().push(job.clone());
        Ok(job)
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: JobListingUpdate,
    ) -> Result<JobListing, DbError> {
        let oid = parse_job_id(id)?;
        let mut jobs = self.lock();
        let job = jobs
            .iter_mut()
            .find(|job| job.id == oid)
            .ok_or_else(|| DbError::NotFound(oid.to_hex()))?;
        input.apply_to(job);
        Ok(job.clone())
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError> {
        let oid = parse_job_id(id)?;
        self.lock().retain(|job| job.id != oid);
        Ok(DeleteJobResponse {
            delete_job_id: id.to_owned(),
        })
    }
}
