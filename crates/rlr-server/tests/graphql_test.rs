//! GraphQL schema tests, executed directly against the schema with a
//! caller injected into the request data.

mod common;

use async_graphql::{Request, Response, Value};
use rlr_core::models::permission::API_USER_GROUP;
use rlr_server::AppState;
use rlr_server::caller::Caller;
use serde_json::json;

async fn run(state: &AppState, caller: Caller, query: &str) -> Response {
    state
        .schema()
        .execute(Request::new(query).data(caller))
        .await
}

fn data(response: Response) -> serde_json::Value {
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

fn category(response: &Response) -> Option<Value> {
    response.errors[0]
        .extensions
        .as_ref()
        .and_then(|ext| ext.get("category").cloned())
}

fn api_user() -> Caller {
    Caller::ServiceAccount {
        username: "requestlogger-api@oxid-esales.com".into(),
        groups: vec![API_USER_GROUP.into()],
    }
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[tokio::test]
async fn anonymous_caller_is_rejected() {
    let state = common::app_state(true).await;

    let resp = run(&state, Caller::Anonymous, "{ requestLoggerLogLevel { value } }").await;
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(category(&resp), Some(Value::from("unauthenticated")));

    let resp = run(&state, Caller::Anonymous, "mutation { requestLoggerResetPassword }").await;
    assert_eq!(category(&resp), Some(Value::from("unauthenticated")));
}

#[tokio::test]
async fn caller_without_right_is_forbidden() {
    let state = common::app_state(true).await;
    let customer = Caller::ServiceAccount {
        username: "customer@example.com".into(),
        groups: vec!["oxidcustomer".into()],
    };

    let resp = run(&state, customer, "{ requestLoggerIsActive }").await;
    assert_eq!(category(&resp), Some(Value::from("permission")));
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unset_settings_read_as_defaults() {
    let state = common::app_state(true).await;

    let resp = run(
        &state,
        api_user(),
        r#"{
            requestLoggerLogLevel { name value }
            requestLoggerLogFrontend { value }
            requestLoggerLogAdmin { value }
            requestLoggerRedact { value }
            requestLoggerRedactAllValues { value }
        }"#,
    )
    .await;

    assert_eq!(
        data(resp),
        json!({
            "requestLoggerLogLevel": { "name": "oxsrequestlogger_log-level", "value": "" },
            "requestLoggerLogFrontend": { "value": false },
            "requestLoggerLogAdmin": { "value": false },
            "requestLoggerRedact": { "value": "[]" },
            "requestLoggerRedactAllValues": { "value": false },
        })
    );
}

#[tokio::test]
async fn settings_list_names_and_types() {
    let state = common::app_state(true).await;

    let resp = run(&state, api_user(), "{ requestLoggerSettings { name type } }").await;
    let list = data(resp)["requestLoggerSettings"].clone();

    assert_eq!(list.as_array().unwrap().len(), 5);
    assert_eq!(
        list[0],
        json!({ "name": "oxsrequestlogger_log-level", "type": "select" })
    );
    assert_eq!(
        list[3],
        json!({ "name": "oxsrequestlogger_redact", "type": "arr" })
    );
}

#[tokio::test]
async fn change_mutations_return_stored_values() {
    let state = common::app_state(true).await;

    let resp = run(
        &state,
        api_user(),
        r#"mutation {
            requestLoggerLogLevelChange(value: "debug") { value }
            requestLoggerLogFrontendChange(value: true) { value }
            requestLoggerRedactAllValuesChange(value: true) { value }
            requestLoggerRedactChange(value: "[\"pwd\",\"lgn_pwd\"]") { name value }
        }"#,
    )
    .await;

    assert_eq!(
        data(resp),
        json!({
            "requestLoggerLogLevelChange": { "value": "debug" },
            "requestLoggerLogFrontendChange": { "value": true },
            "requestLoggerRedactAllValuesChange": { "value": true },
            "requestLoggerRedactChange": {
                "name": "oxsrequestlogger_redact",
                "value": "[\"pwd\",\"lgn_pwd\"]",
            },
        })
    );

    let resp = run(&state, api_user(), "{ requestLoggerLogLevel { value } }").await;
    assert_eq!(data(resp)["requestLoggerLogLevel"]["value"], "debug");
}

#[tokio::test]
async fn redact_change_accepts_mixed_and_nested_arrays() {
    let state = common::app_state(true).await;

    let resp = run(
        &state,
        api_user(),
        r#"mutation {
            requestLoggerRedactChange(value: "[\"string\", 123, true, null]") { value }
        }"#,
    )
    .await;
    assert_eq!(
        data(resp)["requestLoggerRedactChange"]["value"],
        r#"["string","123","true","null"]"#
    );

    let resp = run(
        &state,
        api_user(),
        r#"mutation { requestLoggerRedactChange(value: "[[[]]]") { value } }"#,
    )
    .await;
    assert_eq!(
        data(resp)["requestLoggerRedactChange"]["value"],
        r#"["[[]]"]"#
    );

    let resp = run(&state, api_user(), "{ requestLoggerRedact { value } }").await;
    assert_eq!(data(resp)["requestLoggerRedact"]["value"], r#"["[[]]"]"#);
}

#[tokio::test]
async fn redact_change_rejects_non_array() {
    let state = common::app_state(true).await;

    let resp = run(
        &state,
        Caller::Administrator,
        r#"mutation { requestLoggerRedactChange(value: "{\"a\":1}") { value } }"#,
    )
    .await;

    assert_eq!(
        resp.errors[0].message,
        "Invalid JSON array provided for redact items"
    );
    assert_eq!(category(&resp), Some(Value::from("validation")));
}

// ---------------------------------------------------------------------------
// Activation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn activate_and_deactivate_request_logger() {
    let state = common::app_state(true).await;

    let resp = run(&state, Caller::Administrator, "{ requestLoggerIsActive }").await;
    assert_eq!(data(resp)["requestLoggerIsActive"], false);

    let resp = run(&state, Caller::Administrator, "mutation { requestLoggerActivate }").await;
    assert_eq!(data(resp)["requestLoggerActivate"], true);

    let resp = run(&state, Caller::Administrator, "{ requestLoggerIsActive }").await;
    assert_eq!(data(resp)["requestLoggerIsActive"], true);

    let resp = run(&state, Caller::Administrator, "mutation { requestLoggerDeactivate }").await;
    assert_eq!(data(resp)["requestLoggerDeactivate"], true);

    let resp = run(&state, Caller::Administrator, "{ requestLoggerIsActive }").await;
    assert_eq!(data(resp)["requestLoggerIsActive"], false);
}

// ---------------------------------------------------------------------------
// Password bootstrap
// ---------------------------------------------------------------------------

fn set_password(token: &str, password: &str) -> String {
    format!(r#"mutation {{ requestLoggerSetPassword(token: "{token}", password: "{password}") }}"#)
}

#[tokio::test]
async fn set_password_is_public_and_single_use() {
    let state = common::app_state(true).await;
    let token = common::pending_token(&state).await;

    let resp = run(&state, Caller::Anonymous, &set_password("wrong", "longenough1")).await;
    assert_eq!(resp.errors[0].message, "Invalid setup token.");
    assert_eq!(category(&resp), Some(Value::from("permission")));

    let resp = run(&state, Caller::Anonymous, &set_password(&token, "short")).await;
    assert_eq!(category(&resp), Some(Value::from("validation")));

    let resp = run(&state, Caller::Anonymous, &set_password(&token, "longenough1")).await;
    assert_eq!(data(resp)["requestLoggerSetPassword"], true);

    let resp = run(&state, Caller::Anonymous, &set_password(&token, "longenough2")).await;
    assert_eq!(resp.errors[0].message, "Invalid setup token.");
}

#[tokio::test]
async fn reset_password_returns_new_token() {
    let state = common::app_state(true).await;
    let first = common::pending_token(&state).await;

    let resp = run(&state, api_user(), "mutation { requestLoggerResetPassword }").await;
    let token = data(resp)["requestLoggerResetPassword"]
        .as_str()
        .unwrap()
        .to_string();

    assert_ne!(token, first);
    assert_eq!(common::pending_token(&state).await, token);
}

#[tokio::test]
async fn reset_password_without_api_user_is_not_found() {
    let state = common::app_state(false).await;

    let resp = run(&state, Caller::Administrator, "mutation { requestLoggerResetPassword }").await;
    assert_eq!(
        resp.errors[0].message,
        "API user not found. Please run the module migrations first."
    );
    assert_eq!(category(&resp), Some(Value::from("notfound")));
}
