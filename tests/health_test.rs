use actix_web::{http::StatusCode, test};
use serde_json::Value;
use serial_test::serial;

mod common;
use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_health_check() {
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    for uri in ["/health", "/api/health"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        // mongodb may be down in CI; the endpoint reports rather than fails
        assert!(["ok", "degraded"].contains(&body["status"].as_str().unwrap()));
        assert!(body["services"]["mongodb"].is_object());
        assert_eq!(body["providers"], serde_json::json!([]));
    }
}
