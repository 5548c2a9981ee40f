use serde_json::json;
use spotlaunch::management::TokenManager;

fn manager() -> TokenManager {
    TokenManager::new(
        "client-id".to_string(),
        "client-secret".to_string(),
        "refresh-token".to_string(),
    )
}

#[test]
fn test_token_is_expired_after_construction() {
    let mgr = manager();

    assert!(mgr.is_expired());
    assert_eq!(mgr.access_token(), "");
}

#[test]
fn test_successful_refresh_response_stores_token() {
    let mut mgr = manager();

    let ok = mgr.apply_refresh_response(&json!({
        "access_token": "fresh-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }));

    assert!(ok);
    assert_eq!(mgr.access_token(), "fresh-token");
    assert!(!mgr.is_expired());
    assert_eq!(mgr.last_error(), "");
}

#[test]
fn test_error_description_is_recorded_and_token_cleared() {
    let mut mgr = manager();
    // Start from a held token so the failure visibly clears it.
    mgr.apply_refresh_response(&json!({"access_token": "old", "expires_in": 3600}));

    let ok = mgr.apply_refresh_response(&json!({
        "error": "invalid_client",
        "error_description": "invalid_client"
    }));

    assert!(!ok);
    assert_eq!(mgr.access_token(), "");
    assert!(mgr.is_expired());
    assert_eq!(mgr.last_error(), "invalid_client");
}

#[test]
fn test_error_field_is_fallback_without_description() {
    let mut mgr = manager();

    mgr.apply_refresh_response(&json!({"error": "server_error"}));

    assert_eq!(mgr.last_error(), "server_error");
}

#[test]
fn test_successful_refresh_clears_previous_error() {
    let mut mgr = manager();

    mgr.apply_refresh_response(&json!({"error": "invalid_grant"}));
    assert_eq!(mgr.last_error(), "invalid_grant");

    mgr.apply_refresh_response(&json!({"access_token": "fresh", "expires_in": 3600}));
    assert_eq!(mgr.last_error(), "");
}

#[test]
fn test_refresh_returning_same_token_still_succeeds() {
    let mut mgr = manager();
    mgr.apply_refresh_response(&json!({"access_token": "same", "expires_in": 3600}));

    let ok = mgr.apply_refresh_response(&json!({"access_token": "same", "expires_in": 3600}));

    assert!(ok);
    assert!(!mgr.is_expired());
}

#[test]
fn test_missing_expires_in_counts_as_already_expired() {
    let mut mgr = manager();

    let ok = mgr.apply_refresh_response(&json!({"access_token": "fresh"}));

    assert!(ok);
    assert_eq!(mgr.access_token(), "fresh");
    // No lifetime given, so the next operation must refresh again.
    assert!(mgr.is_expired());
}

#[test]
fn test_setters_detect_changes() {
    let mut mgr = manager();

    assert!(!mgr.set_client_id("client-id"));
    assert!(mgr.set_client_id("other-id"));
    assert_eq!(mgr.client_id(), "other-id");

    assert!(!mgr.set_client_secret("client-secret"));
    assert!(mgr.set_client_secret("other-secret"));
    assert_eq!(mgr.client_secret(), "other-secret");

    assert!(!mgr.set_refresh_token("refresh-token"));
    assert!(mgr.set_refresh_token("other-token"));
    assert_eq!(mgr.refresh_token(), "other-token");
}
