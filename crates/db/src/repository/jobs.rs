//! MongoDB-backed job listing repository.
//!
//! Each operation is one bounded round trip to the `jobs` collection, except
//! create, which inserts and then reads the new document back by the
//! `ObjectId` the insert acknowledged.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::Collection;
use tracing::{debug, instrument};

use super::{parse_job_id, JobRepository};
use crate::models::{DeleteJobResponse, JobListing, JobListingUpdate, NewJobListing};
use crate::pool::bounded;
use crate::{DbConfig, DbError, DbPool};

/// Job repository over a shared [`DbPool`].
#[derive(Clone)]
pub struct MongoJobRepository {
    collection: Collection<JobListing>,
    timeout: Duration,
}

impl MongoJobRepository {
    pub fn new(pool: &DbPool, config: &DbConfig) -> Self {
        Self {
            collection: pool.collection(&config.collection),
            timeout: config.timeout,
        }
    }

    async fn find_by_id(&self, oid: ObjectId) -> Result<JobListing, DbError> {
        bounded(self.timeout, self.collection.find_one(doc! { "_id": oid }))
            .await??
            .ok_or_else(|| DbError::NotFound(oid.to_hex()))
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    #[instrument(skip(self))]
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError> {
        let oid = parse_job_id(id)?;
        self.find_by_id(oid).await
    }

    /// The bound applies to each round trip: the initial `find` and every
    /// batch fetched while draining the cursor.
    #[instrument(skip(self))]
    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError> {
        let mut cursor = bounded(self.timeout, self.collection.find(doc! {})).await??;
        let mut jobs = Vec::new();
        // One undecodable document fails the whole fetch.
        while bounded(self.timeout, cursor.advance()).await?? {
            jobs.push(cursor.deserialize_current()?);
        }

        debug!("fetched {} job listings", jobs.len());
        Ok(jobs)
    }

    #[instrument(skip(self, input), fields(title = %input.title, company = %input.company))]
    async fn create_job_listing(&self, input: NewJobListing) -> Result<JobListing, DbError> {
        let inserts = self.collection.clone_with_type::<NewJobListing>();
        let inserted = bounded(self.timeout, inserts.insert_one(&input)).await??;

        let oid = inserted.inserted_id.as_object_id().ok_or_else(|| {
            DbError::Decode(format!(
                "insert acknowledged a non-ObjectId id: {}",
                inserted.inserted_id
            ))
        })?;
        debug!(id = %oid, "inserted job listing");

        self.find_by_id(oid).await
    }

    #[instrument(skip(self, input))]
    async fn update_job_listing(
        &self,
        id: &str,
        input: JobListingUpdate,
    ) -> Result<JobListing, DbError> {
        let oid = parse_job_id(id)?;

        // MongoDB rejects an empty `$set`.
        if input.is_empty() {
            debug!("empty update, returning current listing");
            return self.find_by_id(oid).await;
        }

        let update = doc! { "$set": input.to_set_document() };
        bounded(
            self.timeout,
            self.collection
                .find_one_and_update(doc! { "_id": oid }, update)
                .return_document(ReturnDocument::After),
        )
        .await??
        .ok_or_else(|| DbError::NotFound(oid.to_hex()))
    }

    #[instrument(skip(self))]
    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError> {
        let oid = parse_job_id(id)?;
        let result = bounded(self.timeout, self.collection.delete_one(doc! { "_id": oid })).await??;

        if result.deleted_count == 0 {
            debug!("no job listing matched, nothing deleted");
        }

        Ok(DeleteJobResponse {
            delete_job_id: id.to_owned(),
        })
    }
}
