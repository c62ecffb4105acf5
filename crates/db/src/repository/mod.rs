//! The job listing repository.
//!
//! [`JobRepository`] is the seam the API layer calls through. Every method
//! returns a `Result<T, DbError>`; nothing here terminates the process.

pub mod jobs;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::{DeleteJobResponse, JobListing, JobListingUpdate, NewJobListing};
use crate::DbError;

pub use jobs::MongoJobRepository;

/// CRUD over the single job listing collection.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Fetch one listing by its hex id.
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError>;

    /// Fetch every listing, in whatever order the store returns them.
    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError>;

    /// Insert a listing and return it as persisted, including its new id.
    async fn create_job_listing(&self, input: NewJobListing) -> Result<JobListing, DbError>;

    /// Apply a partial update and return the listing after the change.
    ///
    /// An empty update is a no-op that returns the current listing.
    async fn update_job_listing(
        &self,
        id: &str,
        input: JobListingUpdate,
    ) -> Result<JobListing, DbError>;

    /// Remove a listing. Deleting an id that does not exist still succeeds.
    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError>;
}

/// Parse a caller-supplied id into the store's native `ObjectId`.
pub fn parse_job_id(id: &str) -> Result<ObjectId, DbError> {
    ObjectId::parse_str(id).map_err(|source| DbError::InvalidId {
        id: id.to_owned(),
        source,
    })
}
