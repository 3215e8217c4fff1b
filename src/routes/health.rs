use actix_web::{web, HttpResponse, Responder};
use mongodb::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::mongo;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    providers: Vec<&'static str>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health
    /api/health
*/
pub async fn health_check(
    state: web::Data<AppState>,
    client: web::Data<Arc<Client>>,
) -> impl Responder {
    let mongo_result = check_mongodb(&client).await;

    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        providers: state.config.configured_providers(),
        environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if mongo_result.status != "ok" {
        health.status = "degraded".to_string();
    }
    health.services.insert("mongodb".to_string(), mongo_result);
    health.services.insert(
        "price_cache".to_string(),
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("{} entries", state.cache.len().await)),
        },
    );

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &Client) -> ServiceStatus {
    match mongo::ping(client).await {
        Ok(()) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Connected successfully to MongoDB".to_string()),
        },
        Err(e) => {
            log::warn!("MongoDB health check failed: {}", e);
            ServiceStatus {
                status: "error".to_string(),
                details: Some("Database unreachable".to_string()),
            }
        }
    }
}
