mod common;

use boarding_core::{AppError, ListQuery, PaginationParams};
use boarding_models::{CreateReferenceDto, ReferenceFilterParams, UpdateReferenceDto};
use common::test_state;

#[tokio::test]
async fn test_blood_groups_fit_on_one_page() {
    let state = test_state();

    let page = state
        .general
        .blood_groups
        .list(ListQuery::default())
        .await
        .unwrap();

    assert_eq!(page.total, 8);
    assert_eq!(page.data.len(), 8);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_search_without_match_is_empty() {
    let state = test_state();
    let query = ListQuery::default().filters(ReferenceFilterParams::search("nothing-matches"));

    let page = state.general.religions.list(query).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let state = test_state();
    let query = ListQuery::default().filters(ReferenceFilterParams::search("hostel"));

    let page = state.general.designations.list(query).await.unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Hostel Manager");
}

#[tokio::test]
async fn test_whitespace_search_is_matched_literally() {
    let state = test_state();

    let query = ListQuery::default().filters(ReferenceFilterParams::search(" "));
    let page = state.general.designations.list(query).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Hostel Manager");

    let query = ListQuery::default().filters(ReferenceFilterParams::search(" "));
    let page = state.general.blood_groups.list(query).await.unwrap();
    assert_eq!(page.total, 0);

    let query = ListQuery::default().filters(ReferenceFilterParams::search("A+ "));
    let page = state.general.blood_groups.list(query).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_empty_search_lists_everything() {
    let state = test_state();
    let query = ListQuery::default().filters(ReferenceFilterParams::search(""));

    let page = state.general.blood_groups.list(query).await.unwrap();

    assert_eq!(page.total, 8);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let state = test_state();
    let query = ListQuery::new(PaginationParams::new(5, 3), ReferenceFilterParams::default());

    let page = state.general.blood_groups.list(query).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 8);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_pages_partition_the_collection() {
    let state = test_state();
    let mut seen = Vec::new();

    for page in 1..=3 {
        let query = ListQuery::new(PaginationParams::new(page, 3), ReferenceFilterParams::default());
        let result = state.general.blood_groups.list(query).await.unwrap();
        assert!(result.data.len() <= 3);
        assert_eq!(result.total_pages, 3);
        seen.extend(result.data.into_iter().map(|b| b.id.into_inner()));
    }

    let all = state.general.blood_groups.get_all_for_dropdown().await.unwrap();
    let expected: Vec<String> = all.into_iter().map(|b| b.id.into_inner()).collect();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_created_reference_is_listed_first() {
    let state = test_state();

    let created = state
        .general
        .religions
        .create(CreateReferenceDto {
            name: "Sikhism".to_string(),
        })
        .await
        .unwrap();

    assert!(created.id.as_str().starts_with('r'));
    assert!(created.updated_at.is_none());

    let page = state.general.religions.list(ListQuery::default()).await.unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.data[0].id, created.id);
}

#[tokio::test]
async fn test_empty_reference_name_is_rejected() {
    let state = test_state();

    let err = state
        .general
        .genders
        .create(CreateReferenceDto {
            name: String::new(),
        })
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => assert!(errors.contains("name")),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(state.general.genders.count().await, 3);
}

#[tokio::test]
async fn test_update_of_unknown_id_is_not_found() {
    let state = test_state();

    let err = state
        .general
        .relations
        .update(
            "rel404",
            UpdateReferenceDto {
                name: Some("Cousin".to_string()),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Relation not found");
}

#[tokio::test]
async fn test_all_simple_entities() {
    let state = test_state();

    let all = state.general.get_all_simple_entities().await.unwrap();

    assert_eq!(all.genders.len(), 3);
    assert_eq!(all.blood_groups.len(), 8);
    assert_eq!(all.residential_statuses.len(), 4);
    assert_eq!(all.religions.len(), 6);
    assert_eq!(all.relations.len(), 6);
    assert_eq!(all.marital_statuses.len(), 5);
    assert_eq!(all.job_rules.len(), 4);
    assert_eq!(all.designations.len(), 5);
}
