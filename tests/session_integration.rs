mod common;

use common::*;
use console_session::client::ApiError;
use console_session::session::SessionError;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn integration_login_flow() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .match_body(Matcher::Json(json!({"username": "eve", "password": "secret"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(LOGIN_BODY)
        .expect(1)
        .create_async()
        .await;
    let menus = server
        .mock("GET", MENUS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appId".into(), "console-app".into()),
            Matcher::UrlEncoded("code".into(), "MAIN".into()),
        ]))
        .match_header("cookie", "token=token-abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(MENUS_BODY)
        .expect(1)
        .create_async()
        .await;

    let (store, navigator) = build(&test_config(&server.url(), None));
    let response = store
        .login(
            &json!({"username": "eve", "password": "secret"}),
            Some("/users"),
        )
        .await
        .expect("login should succeed");

    login.assert_async().await;
    menus.assert_async().await;

    assert_eq!(response["payload"]["token"], "token-abc");
    assert!(store.is_authenticated());
    assert_eq!(store.token().unwrap().as_deref(), Some("token-abc"));
    assert_eq!(store.user_info().name, "Eve");
    assert_eq!(store.snapshot().user_id, "7");
    assert_eq!(store.snapshot().tenant_id, "tenant-1");
    assert_eq!(navigator.current().as_deref(), Some("/users"));

    let main = store.main_menu();
    let names: Vec<&str> = main.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Dashboard", "Users", "Settings"]);
    assert_eq!(main[0].icon.as_deref(), Some("dashboard.svg"));
    assert_eq!(main[2].url, "/");
    assert_eq!(main[2].icon, None);
    assert!(store.side_menu().is_empty());
}

#[tokio::test]
async fn integration_login_failure() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", LOGIN_PATH)
        .with_status(401)
        .with_body(r#"{"message": "bad credentials"}"#)
        .create_async()
        .await;
    let menus = server
        .mock("GET", MENUS_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (store, navigator) = build(&test_config(&server.url(), None));
    let err = store
        .login(&json!({"username": "eve", "password": "wrong"}), None)
        .await
        .expect_err("login should fail");

    login.assert_async().await;
    menus.assert_async().await;
    assert!(matches!(
        err,
        SessionError::Api(ApiError::Status { status: 401, .. })
    ));
    assert!(!store.is_authenticated());
    assert_eq!(navigator.current(), None);
}

#[tokio::test]
async fn integration_refresh_then_logout() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::UrlEncoded("token".into(), "token-abc".into()))
        .with_status(200)
        .with_body(LOGIN_BODY)
        .create_async()
        .await;
    let menus = server
        .mock("GET", MENUS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(MENUS_BODY)
        .create_async()
        .await;

    let (store, navigator) = build(&test_config(&server.url(), None));
    store.refresh("token-abc").await.expect("refresh should succeed");

    token.assert_async().await;
    menus.assert_async().await;
    assert!(store.is_authenticated());
    assert_eq!(store.main_menu().len(), 3);
    assert_eq!(navigator.current(), None);

    store.logout(Some("/users")).unwrap();

    assert!(!store.is_authenticated());
    assert_eq!(store.user_info().name, "");
    assert!(store.main_menu().is_empty());
    assert_eq!(store.snapshot().meta.title, "Admin");
    assert_eq!(
        navigator.current().as_deref(),
        Some("/login?redirect=%2Fusers")
    );
}

#[tokio::test]
async fn integration_session_persists_in_cookie_file() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_body(LOGIN_BODY)
        .create_async()
        .await;
    let _menus = server
        .mock("GET", MENUS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(MENUS_BODY)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let cookie_file = dir.path().join("cookies.json").display().to_string();
    let config = test_config(&server.url(), Some(&cookie_file));

    let (first, _) = build(&config);
    first
        .login(&json!({"username": "eve", "password": "secret"}), None)
        .await
        .unwrap();

    // A fresh process sees the token but none of the in-memory state.
    let (second, _) = build(&config);
    assert!(second.is_authenticated());
    assert_eq!(second.token().unwrap().as_deref(), Some("token-abc"));
    assert_eq!(second.user_info().name, "");

    second.logout(None).unwrap();
    let (third, _) = build(&config);
    assert!(!third.is_authenticated());
}
