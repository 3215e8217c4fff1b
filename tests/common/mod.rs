#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;
use std::time::Duration;

use globetrotter_api::config::AppConfig;
use globetrotter_api::db::mongo::build_client;
use globetrotter_api::routes;
use globetrotter_api::services::llm_service::TextGenerator;
use globetrotter_api::state::AppState;

/// Never dialled by the validation tests; the short timeout keeps the
/// health check quick when nothing is listening.
const TEST_MONGO_URI: &str = "mongodb://127.0.0.1:27017";

pub struct TestApp {
    pub state: AppState,
    pub client: Arc<mongodb::Client>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_state(AppState::new(AppConfig::offline())).await
    }

    pub async fn with_text_generator(llm: Arc<dyn TextGenerator>) -> Self {
        Self::with_state(AppState::new(AppConfig::offline()).with_text_generator(llm)).await
    }

    async fn with_state(state: AppState) -> Self {
        let client = build_client(TEST_MONGO_URI, Duration::from_millis(200))
            .await
            .expect("valid test mongodb uri");

        Self {
            state,
            client: Arc::new(client),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.state.clone()))
            .app_data(web::Data::new(self.client.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::configure)
    }
}

pub fn get_test_email() -> String {
    "traveller@example.com".to_string()
}

pub fn get_test_password() -> String {
    "testpassword123".to_string()
}
