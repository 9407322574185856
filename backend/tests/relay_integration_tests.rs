//! Integration tests for the relay's public wiring: CORS policy and routes
//! assembled the same way the binary assembles them.

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
    ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use actix_web::http::{Method, StatusCode};
use actix_web::{middleware, test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portfolio_relay::handlers::{configure_github_routes, configure_root_routes};
use portfolio_relay::{cors, AppState, Config, GitHubClient};

const ALLOWED: &str = "https://portfolio.example";

fn test_config(api_url: &str) -> Config {
    Config::from_lookup(|key| match key {
        "GITHUB_TOKEN" => Some("test-token".to_string()),
        "GITHUB_USERNAME" => Some("acct".to_string()),
        "GITHUB_API_URL" => Some(api_url.to_string()),
        "ALLOWED_ORIGINS" => Some(ALLOWED.to_string()),
        _ => None,
    })
    .expect("test config should be valid")
}

macro_rules! init_app {
    ($server:expr) => {{
        let config = test_config(&$server.uri());
        let github = GitHubClient::from_config(&config).expect("client should build");
        let state = web::Data::new(AppState {
            config: config.clone(),
            github,
        });
        test::init_service(
            App::new()
                .app_data(state)
                .wrap(cors(&config))
                .wrap(middleware::NormalizePath::trim())
                .configure(configure_root_routes)
                .configure(configure_github_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_preflight_from_allowed_origin() {
    let mock_server = MockServer::start().await;
    let app = init_app!(mock_server);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/github/repo/issues")
        .insert_header((ORIGIN, ALLOWED))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED
    );
    let allowed_headers = resp
        .headers()
        .get(ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed_headers.contains("content-type"));
}

#[actix_web::test]
async fn test_preflight_from_unknown_origin_gets_no_cors_headers() {
    let mock_server = MockServer::start().await;
    let app = init_app!(mock_server);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/github")
        .insert_header((ORIGIN, "https://evil.example"))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "GET"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_web::test]
async fn test_preflight_for_disallowed_method_is_rejected() {
    let mock_server = MockServer::start().await;
    let app = init_app!(mock_server);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/github/repo")
        .insert_header((ORIGIN, ALLOWED))
        .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(!resp.status().is_success());
}

#[actix_web::test]
async fn test_simple_get_from_allowed_origin_is_readable() {
    let mock_server = MockServer::start().await;
    let app = init_app!(mock_server);

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((ORIGIN, ALLOWED))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        ALLOWED
    );
}

#[actix_web::test]
async fn test_cross_origin_text_post_creates_no_issue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "html_url": "https://github.com/acct/repo/issues/1"
        })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = init_app!(mock_server);

    for origin in [None, Some("https://evil.example")] {
        let mut req = test::TestRequest::post()
            .uri("/github/repo/issues")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"title":"x","body":"y"}"#);
        if let Some(origin) = origin {
            req = req.insert_header((ORIGIN, origin));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "origin {origin:?}");
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}

#[actix_web::test]
async fn test_overview_with_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/acct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "followers": 2,
            "following": 3,
            "public_repos": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/acct/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = init_app!(mock_server);

    let req = test::TestRequest::get().uri("/github/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "followers": 2, "following": 3, "publicRepos": 0, "repositories": [] })
    );
}
