//! Registration and authentication tests

mod common;

use common::{registration, TestHarness};
use survey_service::contract::SurveyError;

#[tokio::test]
async fn registration_derives_username_from_name() {
    let h = TestHarness::new();

    let user = h
        .service
        .register(registration("John", "Smith", "john@example.com"), "agree")
        .await
        .expect("registration should succeed");

    assert_eq!(user.username, "johns");
    assert_eq!(h.users.count(), 1);
    assert_ne!(user.password_hash, "hunter22", "password must be hashed");
}

#[tokio::test]
async fn colliding_usernames_get_incrementing_suffixes() {
    let h = TestHarness::new();

    let first = h
        .service
        .register(registration("John", "Smith", "john@example.com"), "agree")
        .await
        .expect("first registration");
    let second = h
        .service
        .register(registration("John", "Sanders", "john2@example.com"), "agree")
        .await
        .expect("second registration");
    let third = h
        .service
        .register(registration("John", "Sithole", "john3@example.com"), "agree")
        .await
        .expect("third registration");

    assert_eq!(first.username, "johns");
    assert_eq!(second.username, "johns1");
    assert_eq!(third.username, "johns2");
}

#[tokio::test]
async fn duplicate_email_is_rejected_regardless_of_other_fields() {
    let h = TestHarness::new();

    h.service
        .register(registration("John", "Smith", "john@example.com"), "agree")
        .await
        .expect("first registration");

    let result = h
        .service
        .register(
            registration("Completely", "Different", "john@example.com"),
            "agree",
        )
        .await;

    assert!(matches!(result, Err(SurveyError::Conflict { .. })));
    assert_eq!(h.users.count(), 1);
}

#[tokio::test]
async fn insert_race_on_username_retries_with_next_suffix() {
    let h = TestHarness::new();

    // The probe cannot see this username but the unique index rejects it,
    // as if a concurrent registration landed in between
    h.users.reserve_username("johns");

    let user = h
        .service
        .register(registration("John", "Smith", "john@example.com"), "agree")
        .await
        .expect("registration should fall back to the next suffix");

    assert_eq!(user.username, "johns1");
}

#[tokio::test]
async fn declaration_must_be_agreed() {
    let h = TestHarness::new();

    let result = h
        .service
        .register(registration("John", "Smith", "john@example.com"), "")
        .await;

    let Err(SurveyError::Validation { errors }) = result else {
        panic!("expected validation error, got {:?}", result);
    };
    assert!(errors.iter().any(|e| e.field == "declaration"));
    assert_eq!(h.users.count(), 0);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let h = TestHarness::new();

    h.service
        .register(registration("John", "Smith", "john@example.com"), "agree")
        .await
        .expect("registration");

    let wrong_password = h.service.login("john@example.com", "wrong").await;
    let unknown_email = h.service.login("nobody@example.com", "hunter22").await;

    assert!(matches!(wrong_password, Err(SurveyError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(SurveyError::InvalidCredentials)));
}

#[tokio::test]
async fn login_opens_a_session_and_logout_closes_it() {
    let h = TestHarness::new();
    let (token, user) = h.register_and_login().await;

    assert_eq!(h.service.sessions().authenticated_user(&token), Some(user.id));

    h.service.logout(&token);
    assert!(h.service.sessions().authenticated_user(&token).is_none());
}

#[tokio::test]
async fn record_location_overwrites_coordinates() {
    let h = TestHarness::new();
    let (token, user) = h.register_and_login().await;

    h.service
        .record_location(&token, Some(-33.93), Some(18.86))
        .await
        .expect("location update");

    let stored = h.users.get(user.id).expect("user exists");
    assert_eq!(stored.latitude, Some(-33.93));
    assert_eq!(stored.longitude, Some(18.86));

    // Overwrite, not append
    h.service
        .record_location(&token, Some(-34.0), Some(19.0))
        .await
        .expect("second location update");
    let stored = h.users.get(user.id).expect("user exists");
    assert_eq!(stored.latitude, Some(-34.0));
}

#[tokio::test]
async fn record_location_requires_both_coordinates_and_a_session() {
    let h = TestHarness::new();

    let unauthenticated = h.service.record_location("no-such-token", Some(1.0), Some(2.0)).await;
    assert!(matches!(unauthenticated, Err(SurveyError::Unauthenticated)));

    let (token, _) = h.register_and_login().await;
    let missing = h.service.record_location(&token, Some(1.0), None).await;
    let Err(SurveyError::Validation { errors }) = missing else {
        panic!("expected validation error");
    };
    assert!(errors.iter().any(|e| e.field == "longitude"));
}
