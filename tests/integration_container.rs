mod common;

use std::time::Duration;

use boarding::container::{LoadStatus, StateContainer};
use boarding::fixtures::Fixtures;
use boarding::latency::Latency;
use boarding::repository::Repository;
use boarding::store::InMemoryStore;
use boarding_config::{LatencyConfig, PaginationConfig};
use boarding_models::{Guardian, GuardianFilterParams};
use common::{guardian_dto, test_state};

type GuardianView = StateContainer<Guardian, GuardianFilterParams>;

fn search(term: &str) -> GuardianFilterParams {
    GuardianFilterParams {
        search: Some(term.to_string()),
    }
}

#[tokio::test]
async fn test_fetch_loads_first_page() {
    let state = test_state();
    let repository = &state.general.guardians;
    let view = GuardianView::new("guardian", "guardians");

    assert!(view.fetch(|query| repository.list(query)).await);

    let snapshot = view.snapshot();
    assert_eq!(snapshot.status, LoadStatus::Succeeded);
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.pagination.total, 2);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn test_older_response_is_discarded() {
    let state = test_state();
    let repository = &state.general.guardians;
    let view = GuardianView::new("guardian", "guardians");

    let first = view.begin_fetch();
    view.set_filters(search("nahar"));
    let second = view.begin_fetch();

    let newer = repository.list(second.query.clone()).await;
    let older = repository.list(first.query.clone()).await;

    assert!(view.complete_fetch(second, newer));
    assert!(!view.complete_fetch(first, older));

    let snapshot = view.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].name, "Shamsun Nahar");
    assert_eq!(snapshot.status, LoadStatus::Succeeded);
}

#[tokio::test(start_paused = true)]
async fn test_slow_response_loses_to_later_filter() {
    let fixtures = Fixtures::load().unwrap();
    let repository = Repository::new(
        InMemoryStore::seeded(fixtures.guardians),
        Latency::new(LatencyConfig::deterministic()),
        PaginationConfig::default(),
    );
    let view = GuardianView::new("guardian", "guardians");
    let repo = &repository;

    let (slow, fast) = tokio::join!(
        view.fetch(move |query| async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            repo.list(query).await
        }),
        view.apply_filters(search("karim"), move |query| repo.list(query)),
    );

    assert!(!slow);
    assert!(fast);
    let snapshot = view.snapshot();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].name, "Abdul Karim");
    assert_eq!(snapshot.filters, search("karim"));
}

#[tokio::test]
async fn test_filter_change_resets_page() {
    let state = test_state();
    let repository = &state.general.guardians;
    let view = GuardianView::new("guardian", "guardians");
    view.set_limit(1);

    assert!(view.go_to_page(2, |query| repository.list(query)).await);
    assert_eq!(view.snapshot().pagination.page, 2);

    assert!(view.apply_filters(search("a"), |query| repository.list(query)).await);

    let snapshot = view.snapshot();
    assert_eq!(snapshot.pagination.page, 1);
    assert_eq!(snapshot.pagination.limit, 1);
    assert_eq!(snapshot.pagination.total_pages, 2);
}

#[tokio::test]
async fn test_mutations_update_the_view() {
    let state = test_state();
    let repository = &state.general.guardians;
    let view = GuardianView::new("guardian", "guardians");
    view.fetch(|query| repository.list(query)).await;

    let created = view
        .run_create(repository.create(guardian_dto("Rafiq Ahmed")))
        .await
        .unwrap();
    let snapshot = view.snapshot();
    assert_eq!(snapshot.items[0].id, created.id);
    assert_eq!(snapshot.pagination.total, 3);

    view.run_select(repository.get_by_id(created.id.as_str()))
        .await
        .unwrap();
    view.run_delete(created.id.as_str(), repository.delete(created.id.as_str()))
        .await
        .unwrap();

    let snapshot = view.snapshot();
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.pagination.total, 2);
    assert!(snapshot.selected.is_none());
}

#[tokio::test]
async fn test_failed_get_reports_not_found() {
    let state = test_state();
    let repository = &state.general.guardians;
    let view = GuardianView::new("guardian", "guardians");
    view.fetch(|query| repository.list(query)).await;

    let result = view.run_select(repository.get_by_id("gdn404")).await;

    assert!(result.is_err());
    let snapshot = view.snapshot();
    assert_eq!(snapshot.status, LoadStatus::Failed);
    assert_eq!(snapshot.error.as_deref(), Some("Guardian not found"));
    assert_eq!(snapshot.items.len(), 2);
}
