mod common;

use boarding_core::{AppError, ListQuery};
use boarding_models::{GuardianFilterParams, UpdateGuardianDto};
use common::{guardian_dto, test_state};

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let state = test_state();
    let guardians = &state.general.guardians;

    let created = guardians.create(guardian_dto("Rafiq Ahmed")).await.unwrap();
    let fetched = guardians.get_by_id(created.id.as_str()).await.unwrap();

    assert!(created.id.as_str().starts_with("gd"));
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Rafiq Ahmed");
    assert_eq!(fetched.occupation.as_deref(), Some("Pharmacist"));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let state = test_state();
    let guardians = &state.general.guardians;

    let first = guardians.create(guardian_dto("Rafiq Ahmed")).await.unwrap();
    let second = guardians.create(guardian_dto("Rafiq Ahmed")).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(guardians.count().await, 4);
}

#[tokio::test]
async fn test_same_as_present_is_stored_as_given() {
    let state = test_state();
    let mut dto = guardian_dto("Rafiq Ahmed");
    dto.same_as_present = true;
    dto.permanent_address = None;

    let created = state.general.guardians.create(dto).await.unwrap();

    assert!(created.same_as_present);
    assert!(created.present_address.is_some());
    assert!(created.permanent_address.is_none());
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let state = test_state();
    let guardians = &state.general.guardians;
    let before = guardians.get_by_id("gdn1").await.unwrap();

    let updated = guardians
        .update(
            "gdn1",
            UpdateGuardianDto {
                occupation: Some("Farmer".to_string()),
                ..UpdateGuardianDto::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.occupation.as_deref(), Some("Farmer"));
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.phone, before.phone);
    assert_eq!(updated.present_address, before.present_address);
    assert_eq!(updated.created_at, before.created_at);
    assert!(before.updated_at.is_none());
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let state = test_state();
    let guardians = &state.general.guardians;

    guardians.delete("gdn2").await.unwrap();
    let err = guardians.get_by_id("gdn2").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(err.to_string(), "Guardian not found");
    assert!(guardians.delete("gdn2").await.is_err());
}

#[tokio::test]
async fn test_invalid_create_leaves_store_unchanged() {
    let state = test_state();
    let guardians = &state.general.guardians;
    let mut dto = guardian_dto("Rafiq Ahmed");
    dto.phone = Some("not-a-phone".to_string());
    dto.email = Some("not-an-email".to_string());

    let err = guardians.create(dto).await.unwrap_err();

    let AppError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert!(errors.contains("phone"));
    assert!(errors.contains("email"));
    assert_eq!(guardians.count().await, 2);
}

#[tokio::test]
async fn test_empty_email_counts_as_absent() {
    let state = test_state();
    let mut dto = guardian_dto("Rafiq Ahmed");
    dto.email = Some(String::new());

    assert!(state.general.guardians.create(dto).await.is_ok());
}

#[tokio::test]
async fn test_search_matches_occupation() {
    let state = test_state();
    let guardians = &state.general.guardians;
    guardians.create(guardian_dto("Rafiq Ahmed")).await.unwrap();

    let query = ListQuery::default().filters(GuardianFilterParams {
        search: Some("PHARMA".to_string()),
    });
    let page = guardians.list(query).await.unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].name, "Rafiq Ahmed");
}

#[tokio::test]
async fn test_invalid_update_leaves_record_unchanged() {
    let state = test_state();
    let guardians = &state.general.guardians;
    let before = guardians.get_by_id("gdn1").await.unwrap();

    let result = guardians
        .update(
            "gdn1",
            UpdateGuardianDto {
                name: Some("Abdul Karim Mia".to_string()),
                email: Some("broken@".to_string()),
                ..UpdateGuardianDto::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(guardians.get_by_id("gdn1").await.unwrap(), before);
}

#[tokio::test]
async fn test_get_by_id_is_idempotent() {
    let state = test_state();
    let guardians = &state.general.guardians;

    let first = guardians.get_by_id("gdn1").await.unwrap();
    let second = guardians.get_by_id("gdn1").await.unwrap();

    assert_eq!(first, second);
}
