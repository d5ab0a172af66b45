//! View state for one entity type: the loaded page, selection, filters,
//! pagination, load status and last error.
//!
//! Every list fetch draws a sequence number. A response is applied only when
//! its number is still the latest issued, so a slow response to an old filter
//! can never overwrite the result of a newer one. The previous page stays
//! visible while a fetch is in flight and after a failed one.
//!
//! # Example
//!
//! ```ignore
//! use boarding::container::StateContainer;
//!
//! let view = StateContainer::new("staff", "staffs");
//! view.apply_filters(filters, |query| state.staff.list(query)).await;
//! assert_eq!(view.snapshot().pagination.page, 1);
//! ```

use std::fmt::Display;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use boarding_core::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE};
use boarding_core::{AppResult, ListQuery, Operation, Paginated, PaginationParams};
use boarding_models::Identified;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::metrics::track_stale_response;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            total: 0,
            total_pages: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState<T, F> {
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub filters: F,
    pub pagination: PageState,
    pub status: LoadStatus,
    pub error: Option<String>,
}

impl<T, F: Default> Default for ViewState<T, F> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            filters: F::default(),
            pagination: PageState::default(),
            status: LoadStatus::Idle,
            error: None,
        }
    }
}

/// An issued list fetch. Hand it back to [`StateContainer::complete_fetch`].
#[derive(Debug, Clone)]
pub struct FetchTicket<F> {
    pub seq: u64,
    pub request_id: Uuid,
    pub query: ListQuery<F>,
}

struct Inner<T, F> {
    view: ViewState<T, F>,
    latest_seq: u64,
}

/// Builds the stored failure message: the error's own message, or
/// `"Failed to <verb> <entity>"` when it has none.
pub fn failure_message(operation: Operation, entity: &str, error: &dyn Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        format!("Failed to {} {}", operation.verb(), entity)
    } else {
        message
    }
}

pub struct StateContainer<T, F> {
    singular: &'static str,
    plural: &'static str,
    inner: Mutex<Inner<T, F>>,
}

impl<T, F> std::fmt::Debug for StateContainer<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateContainer")
            .field("entity", &self.singular)
            .finish_non_exhaustive()
    }
}

impl<T, F> StateContainer<T, F>
where
    T: Identified + Clone,
    F: Clone + Default,
{
    /// `singular` and `plural` name the entity in failure messages, e.g.
    /// "staff" and "staffs".
    pub fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular,
            plural,
            inner: Mutex::new(Inner {
                view: ViewState::default(),
                latest_seq: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T, F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn entity_for(&self, operation: Operation) -> &'static str {
        match operation {
            Operation::List | Operation::Dropdown => self.plural,
            _ => self.singular,
        }
    }

    pub fn snapshot(&self) -> ViewState<T, F> {
        self.lock().view.clone()
    }

    // ------------------------------------------------------------------------
    // List fetches
    // ------------------------------------------------------------------------

    /// Marks a list fetch in flight and returns the query it should run.
    pub fn begin_fetch(&self) -> FetchTicket<F> {
        let mut inner = self.lock();
        inner.latest_seq += 1;
        inner.view.status = LoadStatus::Loading;
        inner.view.error = None;

        let query = ListQuery::new(
            PaginationParams::new(inner.view.pagination.page, inner.view.pagination.limit),
            inner.view.filters.clone(),
        );
        let ticket = FetchTicket {
            seq: inner.latest_seq,
            request_id: Uuid::new_v4(),
            query,
        };
        debug!(entity = self.plural, seq = ticket.seq, request_id = %ticket.request_id, "fetch started");
        ticket
    }

    /// Applies a list response. Returns `false` when a newer fetch has been
    /// issued since, in which case the response is dropped.
    pub fn complete_fetch(&self, ticket: FetchTicket<F>, result: AppResult<Paginated<T>>) -> bool {
        let mut inner = self.lock();
        if ticket.seq != inner.latest_seq {
            debug!(
                entity = self.plural,
                seq = ticket.seq,
                latest = inner.latest_seq,
                request_id = %ticket.request_id,
                "discarding stale response"
            );
            track_stale_response(self.plural);
            return false;
        }

        match result {
            Ok(page) => {
                inner.view.pagination = PageState {
                    page: page.page,
                    limit: page.limit,
                    total: page.total,
                    total_pages: page.total_pages,
                };
                inner.view.items = page.data;
                inner.view.status = LoadStatus::Succeeded;
            }
            Err(err) => {
                warn!(entity = self.plural, request_id = %ticket.request_id, error = %err, "fetch failed");
                inner.view.status = LoadStatus::Failed;
                inner.view.error = Some(failure_message(Operation::List, self.plural, &err));
            }
        }
        true
    }

    /// Runs one list fetch with the current filters and page.
    pub async fn fetch<Fut>(&self, load: impl FnOnce(ListQuery<F>) -> Fut) -> bool
    where
        Fut: Future<Output = AppResult<Paginated<T>>>,
    {
        let ticket = self.begin_fetch();
        let result = load(ticket.query.clone()).await;
        self.complete_fetch(ticket, result)
    }

    /// Replaces the filters, resets to page 1 and refetches.
    pub async fn apply_filters<Fut>(&self, filters: F, load: impl FnOnce(ListQuery<F>) -> Fut) -> bool
    where
        Fut: Future<Output = AppResult<Paginated<T>>>,
    {
        self.set_filters(filters);
        self.fetch(load).await
    }

    pub async fn go_to_page<Fut>(&self, page: i64, load: impl FnOnce(ListQuery<F>) -> Fut) -> bool
    where
        Fut: Future<Output = AppResult<Paginated<T>>>,
    {
        self.set_page(page);
        self.fetch(load).await
    }

    // ------------------------------------------------------------------------
    // Plain reducers
    // ------------------------------------------------------------------------

    pub fn set_filters(&self, filters: F) {
        let mut inner = self.lock();
        inner.view.filters = filters;
        inner.view.pagination.page = DEFAULT_PAGE;
    }

    pub fn clear_filters(&self) {
        self.set_filters(F::default());
    }

    pub fn set_page(&self, page: i64) {
        self.lock().view.pagination.page = page.max(1);
    }

    pub fn set_limit(&self, limit: i64) {
        self.lock().view.pagination.limit = limit.max(1);
    }

    pub fn clear_error(&self) {
        self.lock().view.error = None;
    }

    pub fn clear_selected(&self) {
        self.lock().view.selected = None;
    }

    pub fn apply_selected(&self, record: T) {
        let mut inner = self.lock();
        inner.view.selected = Some(record);
        inner.view.status = LoadStatus::Succeeded;
    }

    /// Prepends a created record and bumps the total.
    pub fn apply_created(&self, record: T) {
        let mut inner = self.lock();
        inner.view.items.insert(0, record);
        inner.view.pagination.total += 1;
        inner.view.status = LoadStatus::Succeeded;
    }

    /// Replaces the matching row and the selection, when they hold `record`.
    pub fn apply_updated(&self, record: T) {
        let mut inner = self.lock();
        if let Some(row) = inner
            .view
            .items
            .iter_mut()
            .find(|row| row.key() == record.key())
        {
            *row = record.clone();
        }
        if inner
            .view
            .selected
            .as_ref()
            .is_some_and(|selected| selected.key() == record.key())
        {
            inner.view.selected = Some(record);
        }
        inner.view.status = LoadStatus::Succeeded;
    }

    /// Removes the row, decrements the total (never below zero) and clears a
    /// matching selection.
    pub fn apply_deleted(&self, id: &str) {
        let mut inner = self.lock();
        inner.view.items.retain(|row| row.key() != id);
        inner.view.pagination.total = (inner.view.pagination.total - 1).max(0);
        if inner
            .view
            .selected
            .as_ref()
            .is_some_and(|selected| selected.key() == id)
        {
            inner.view.selected = None;
        }
        inner.view.status = LoadStatus::Succeeded;
    }

    /// Records a failed operation. Items stay as last loaded.
    pub fn fail(&self, operation: Operation, error: &dyn Display) {
        let message = failure_message(operation, self.entity_for(operation), error);
        let mut inner = self.lock();
        inner.view.status = LoadStatus::Failed;
        inner.view.error = Some(message);
    }

    fn begin_mutation(&self) {
        let mut inner = self.lock();
        inner.view.status = LoadStatus::Loading;
        inner.view.error = None;
    }

    // ------------------------------------------------------------------------
    // Operation wrappers
    // ------------------------------------------------------------------------

    pub async fn run_select(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        self.begin_mutation();
        match call.await {
            Ok(record) => {
                self.apply_selected(record.clone());
                Ok(record)
            }
            Err(err) => {
                self.fail(Operation::Get, &err);
                Err(err)
            }
        }
    }

    pub async fn run_create(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        self.begin_mutation();
        match call.await {
            Ok(record) => {
                self.apply_created(record.clone());
                Ok(record)
            }
            Err(err) => {
                self.fail(Operation::Create, &err);
                Err(err)
            }
        }
    }

    pub async fn run_update(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        self.begin_mutation();
        match call.await {
            Ok(record) => {
                self.apply_updated(record.clone());
                Ok(record)
            }
            Err(err) => {
                self.fail(Operation::Update, &err);
                Err(err)
            }
        }
    }

    pub async fn run_delete(
        &self,
        id: &str,
        call: impl Future<Output = AppResult<()>>,
    ) -> AppResult<()> {
        self.begin_mutation();
        match call.await {
            Ok(()) => {
                self.apply_deleted(id);
                Ok(())
            }
            Err(err) => {
                self.fail(Operation::Delete, &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boarding_core::{AppError, paginate};
    use boarding_models::{Gender, ReferenceFilterParams};
    use chrono::Utc;

    type GenderView = StateContainer<Gender, ReferenceFilterParams>;

    fn gender(id: &str, name: &str) -> Gender {
        Gender::new(id, name, Utc::now())
    }

    fn page_of(names: &[(&str, &str)]) -> Paginated<Gender> {
        let rows = names.iter().map(|(id, name)| gender(id, name)).collect();
        paginate(rows, 1, 10)
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let view = GenderView::new("gender", "genders");
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        assert!(view.complete_fetch(second, Ok(page_of(&[("g2", "Female")]))));
        assert!(!view.complete_fetch(first, Ok(page_of(&[("g1", "Male")]))));

        let state = view.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Female");
        assert_eq!(state.status, LoadStatus::Succeeded);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let view = GenderView::new("gender", "genders");
        view.set_page(3);
        view.set_filters(ReferenceFilterParams::search("ma"));
        assert_eq!(view.snapshot().pagination.page, 1);

        view.set_page(2);
        view.clear_filters();
        let state = view.snapshot();
        assert_eq!(state.pagination.page, 1);
        assert_eq!(state.filters, ReferenceFilterParams::default());
    }

    #[test]
    fn test_ticket_carries_current_query() {
        let view = GenderView::new("gender", "genders");
        view.set_filters(ReferenceFilterParams::search("fe"));
        view.set_page(2);
        let ticket = view.begin_fetch();
        assert_eq!(ticket.query.pagination.page(), 2);
        assert_eq!(ticket.query.filters, ReferenceFilterParams::search("fe"));
        assert_eq!(view.snapshot().status, LoadStatus::Loading);
    }

    #[test]
    fn test_failed_fetch_keeps_items() {
        let view = GenderView::new("gender", "genders");
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(page_of(&[("g1", "Male")])));

        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Err(AppError::not_found("Gender", "g9")));

        let state = view.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Gender not found"));
    }

    #[test]
    fn test_failure_message_fallback() {
        assert_eq!(
            failure_message(Operation::List, "staffs", &""),
            "Failed to fetch staffs"
        );
        assert_eq!(
            failure_message(Operation::Delete, "staff", &"Staff not found"),
            "Staff not found"
        );
    }

    #[test]
    fn test_mutation_reducers() {
        let view = GenderView::new("gender", "genders");
        let ticket = view.begin_fetch();
        view.complete_fetch(ticket, Ok(page_of(&[("g1", "Male"), ("g2", "Female")])));

        view.apply_created(gender("g100", "Other"));
        let state = view.snapshot();
        assert_eq!(state.items[0].key(), "g100");
        assert_eq!(state.pagination.total, 3);

        view.apply_selected(gender("g2", "Female"));
        view.apply_updated(gender("g2", "Woman"));
        let state = view.snapshot();
        assert_eq!(state.items[2].name, "Woman");
        assert_eq!(state.selected.as_ref().map(|g| g.name.as_str()), Some("Woman"));

        view.apply_deleted("g2");
        let state = view.snapshot();
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.pagination.total, 2);
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_delete_total_never_negative() {
        let view = GenderView::new("gender", "genders");
        view.apply_deleted("g1");
        assert_eq!(view.snapshot().pagination.total, 0);
    }

    #[tokio::test]
    async fn test_run_delete_failure_sets_error() {
        let view = GenderView::new("gender", "genders");
        let result = view
            .run_delete("g9", async { Err(AppError::not_found("Gender", "g9")) })
            .await;
        assert!(result.is_err());
        let state = view.snapshot();
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Gender not found"));

        view.clear_error();
        assert!(view.snapshot().error.is_none());
    }
}
