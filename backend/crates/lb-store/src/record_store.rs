//! Persistent, ordered record collection.
//!
//! Every mutation runs under the store's write lock and follows the same
//! cycle: load the latest durable snapshot, apply one change, write the
//! whole snapshot back, and only then publish the new collection to
//! readers. A failed write publishes nothing, so the in-memory view never
//! runs ahead of the file.

use crate::{Result as StoreErrorResult, StoreError, snapshot};

use lb_auth::AuthorizationPolicy;
use lb_core::{Identity, Record, RecordFilter};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub struct RecordStore<R: Record> {
    path: PathBuf,
    policy: Arc<AuthorizationPolicy>,
    write_lock: Mutex<()>,
    published: RwLock<Arc<Vec<R>>>,
}

impl<R: Record> RecordStore<R> {
    /// Open the store backed by the snapshot at `path`, creating nothing
    /// until the first write.
    pub async fn open(
        path: impl Into<PathBuf>,
        policy: Arc<AuthorizationPolicy>,
    ) -> StoreErrorResult<Self> {
        let path = path.into();
        let records = snapshot::load::<R>(&path).await?;

        info!(
            "Opened {} store at {} ({} records)",
            R::KIND,
            path.display(),
            records.len()
        );

        Ok(Self {
            path,
            policy,
            write_lock: Mutex::new(()),
            published: RwLock::new(Arc::new(records)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order, optionally restricted by `filter`
    pub async fn list(&self, filter: Option<&RecordFilter>) -> Vec<R> {
        let records = self.snapshot().await;
        match filter {
            None => records.as_ref().clone(),
            Some(filter) => records
                .iter()
                .filter(|record| filter.matches(*record))
                .cloned()
                .collect(),
        }
    }

    pub async fn get(&self, id: &str) -> Option<R> {
        self.snapshot()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.snapshot().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshot().await.is_empty()
    }

    /// Validate `draft`, check the writer against the whitelist, then
    /// append and persist a new record stamped with a fresh id and the
    /// writer's identity.
    pub async fn create(&self, draft: R::Draft, writer: &Identity) -> StoreErrorResult<R> {
        let fields = R::validate(draft)?;
        self.authorize(writer)?;

        let _guard = self.write_lock.lock().await;
        let mut records = snapshot::load::<R>(&self.path).await?;

        let record = R::assemble(fresh_id(&records), fields, writer.clone());
        records.push(record.clone());
        self.commit(records).await?;

        info!("{} created {} {}", writer, R::KIND, record.id());
        Ok(record)
    }

    /// Remove the record with `id`. Unknown ids are reported before the
    /// requester's privileges are checked.
    pub async fn delete(&self, id: &str, requester: &Identity) -> StoreErrorResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = snapshot::load::<R>(&self.path).await?;

        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.authorize(requester)?;

        let removed = records.remove(position);
        self.commit(records).await?;

        info!(
            "{} deleted {} {} (added by {})",
            requester,
            R::KIND,
            removed.id(),
            removed.added_by()
        );
        Ok(())
    }

    async fn snapshot(&self) -> Arc<Vec<R>> {
        Arc::clone(&*self.published.read().await)
    }

    #[track_caller]
    fn authorize(&self, identity: &Identity) -> StoreErrorResult<()> {
        let location = ErrorLocation::from(Location::caller());
        self.policy.require_privileged(identity).map_err(|source| {
            warn!("Rejected {} write from non-whitelisted {}", R::KIND, identity);
            StoreError::Forbidden {
                identity: identity.to_string(),
                kind: R::KIND,
                source,
                location,
            }
        })
    }

    /// Persist `records` and publish them. Caller must hold the write lock.
    async fn commit(&self, records: Vec<R>) -> StoreErrorResult<()> {
        if let Err(e) = snapshot::write_atomic(&self.path, &records).await {
            warn!("Snapshot write failed, keeping previous {} state: {}", R::KIND, e);
            return Err(e);
        }

        *self.published.write().await = Arc::new(records);
        Ok(())
    }
}

fn fresh_id<R: Record>(records: &[R]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !records.iter().any(|record| record.id() == id) {
            return id;
        }
    }
}
