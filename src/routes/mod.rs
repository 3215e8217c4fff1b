use actix_web::web;

use crate::error::ApiError;
use crate::middleware::auth::AuthMiddleware;

pub mod auth;
pub mod health;
pub mod itinerary;
pub mod trips;

/// Malformed bodies answer with the same `{success:false, message}` shape
/// as every other validation failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        ApiError::validation(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {}", err);
        ApiError::validation(err.to_string()).into()
    })
}

/// Registers every route. Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/trips")
                        .route("/search-places", web::get().to(trips::search_places))
                        .route(
                            "/place-details/{place_id}",
                            web::get().to(trips::place_details),
                        )
                        .route("/directions", web::get().to(trips::directions))
                        .route("/attractions", web::get().to(trips::attractions))
                        .route(
                            "/transport-options",
                            web::get().to(trips::transport_options),
                        )
                        .route("/hotel-options", web::get().to(trips::hotel_options))
                        .route(
                            "/generate-packages",
                            web::post().to(trips::generate_packages),
                        )
                        .route("/weather/{location}", web::get().to(trips::weather))
                        .route(
                            "/travel-tips/{destination}",
                            web::get().to(trips::travel_tips),
                        ),
                )
                .service(
                    web::scope("/itinerary")
                        .route("/generate", web::post().to(itinerary::generate)),
                )
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/verify-email/{token}", web::get().to(auth::verify_email))
                        .route("/forgot-password", web::post().to(auth::forgot_password))
                        .route("/reset-password", web::post().to(auth::reset_password))
                        .route(
                            "/resend-verification",
                            web::post().to(auth::resend_verification),
                        )
                        // Protected routes
                        .service(
                            web::scope("")
                                .wrap(AuthMiddleware)
                                .route("/me", web::get().to(auth::me)),
                        ),
                ),
        );
}
