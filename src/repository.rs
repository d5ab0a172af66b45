//! Generic paginated CRUD repository over an [`InMemoryStore`].
//!
//! Every call sleeps for a simulated latency first, then touches the store
//! under its lock. Validation and existence checks happen before any
//! mutation, so a failed call leaves the store unchanged.
//!
//! # Example
//!
//! ```ignore
//! use boarding::repository::Repository;
//! use boarding_core::ListQuery;
//! use boarding_models::{BloodGroup, ReferenceFilterParams};
//!
//! let page = blood_groups
//!     .list(ListQuery::default().filters(ReferenceFilterParams::search("+")))
//!     .await?;
//! assert_eq!(page.total, 4);
//! ```

use boarding_config::{AppConfig, PaginationConfig};
use boarding_core::{AppError, AppResult, ListQuery, Operation, Paginated, paginate};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::entity::Entity;
use crate::latency::Latency;
use crate::metrics::{
    track_collection_size, track_entity_created, track_entity_deleted, track_operation,
};
use crate::store::InMemoryStore;

pub struct Repository<E: Entity> {
    store: InMemoryStore<E>,
    latency: Latency,
    pagination: PaginationConfig,
}

impl<E: Entity> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            latency: self.latency.clone(),
            pagination: self.pagination.clone(),
        }
    }
}

impl<E: Entity> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("entity", &E::NAME)
            .field("latency", &self.latency)
            .field("pagination", &self.pagination)
            .finish()
    }
}

fn record_outcome<T>(entity: &'static str, operation: Operation, result: &AppResult<T>) {
    match result {
        Ok(_) => track_operation(entity, operation, "ok"),
        Err(err) => {
            track_operation(entity, operation, err.kind());
            warn!(entity, operation = %operation, error = %err, "{} {} failed", entity, operation);
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(store: InMemoryStore<E>, latency: Latency, pagination: PaginationConfig) -> Self {
        Self {
            store,
            latency,
            pagination,
        }
    }

    /// Repository over `records` with no latency and default paging.
    pub fn seeded(records: Vec<E>) -> Self {
        Self::new(
            InMemoryStore::seeded(records),
            Latency::disabled(),
            PaginationConfig::default(),
        )
    }

    /// Repository over `records` with the process latency and paging settings.
    pub fn configured(records: Vec<E>, config: &AppConfig) -> Self {
        Self::new(
            InMemoryStore::seeded(records),
            Latency::new(config.latency.clone()),
            config.pagination.clone(),
        )
    }

    pub fn store(&self) -> &InMemoryStore<E> {
        &self.store
    }

    /// Filters the whole collection, then slices one page out of the matches.
    /// A page past the end yields empty `data`.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn list(&self, query: ListQuery<E::Filter>) -> AppResult<Paginated<E>> {
        self.latency.simulate(Operation::List).await;

        let page = query.pagination.page();
        let limit = query
            .pagination
            .limit_within(self.pagination.default_limit, self.pagination.max_limit);
        let matches = self.store.select(|record| record.matches(&query.filters)).await;
        let result = paginate(matches, page, limit);

        debug!(
            page = result.page,
            limit = result.limit,
            total = result.total,
            returned = result.data.len(),
            "listed"
        );
        track_operation(E::NAME, Operation::List, "ok");
        Ok(result)
    }

    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get_by_id(&self, id: &str) -> AppResult<E> {
        self.latency.simulate(Operation::Get).await;

        let result = self
            .store
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(E::NAME, id));
        record_outcome(E::NAME, Operation::Get, &result);
        result
    }

    /// Validates, assigns an id and `createdAt`, and prepends the record.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn create(&self, dto: E::Create) -> AppResult<E> {
        self.latency.simulate(Operation::Create).await;

        if let Err(errors) = E::validate_create(&dto) {
            let result: AppResult<E> = Err(AppError::Validation(errors));
            record_outcome(E::NAME, Operation::Create, &result);
            return result;
        }

        let now = Utc::now();
        let created = self
            .store
            .insert_with(|ids| {
                let id = ids.next_id(E::ID_PREFIX);
                E::build(id, dto, now, ids)
            })
            .await;

        info!(id = %created.id(), "{} created", E::NAME);
        track_operation(E::NAME, Operation::Create, "ok");
        track_entity_created(E::NAME);
        track_collection_size(E::NAME, self.store.len().await);
        Ok(created)
    }

    /// Validates, then shallow-merges the supplied fields and stamps `updatedAt`.
    #[instrument(skip(self, dto), fields(entity = E::NAME))]
    pub async fn update(&self, id: &str, dto: E::Update) -> AppResult<E> {
        self.latency.simulate(Operation::Update).await;

        let result = match E::validate_update(&dto) {
            Err(errors) => Err(AppError::Validation(errors)),
            Ok(()) => {
                let now = Utc::now();
                self.store
                    .update_with(id, |record, ids| {
                        record.merge(dto, ids);
                        record.touch(now);
                    })
                    .await
                    .ok_or_else(|| AppError::not_found(E::NAME, id))
            }
        };

        if result.is_ok() {
            info!("{} updated", E::NAME);
        }
        record_outcome(E::NAME, Operation::Update, &result);
        result
    }

    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.latency.simulate(Operation::Delete).await;

        let result = self
            .store
            .remove(id)
            .await
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(E::NAME, id));

        if result.is_ok() {
            info!("{} deleted", E::NAME);
            track_entity_deleted(E::NAME);
            track_collection_size(E::NAME, self.store.len().await);
        }
        record_outcome(E::NAME, Operation::Delete, &result);
        result
    }

    /// The full collection in store order, unpaginated.
    #[instrument(skip_all, fields(entity = E::NAME))]
    pub async fn get_all_for_dropdown(&self) -> AppResult<Vec<E>> {
        self.latency.simulate(Operation::Dropdown).await;

        let records = self.store.snapshot().await;
        debug!(count = records.len(), "dropdown loaded");
        track_operation(E::NAME, Operation::Dropdown, "ok");
        Ok(records)
    }

    /// Number of stored records. No simulated latency.
    pub async fn count(&self) -> usize {
        self.store.len().await
    }
}
