use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::trip::TripRequest;
use crate::state::AppState;

/*
    /api/itinerary/generate
*/
pub async fn generate(
    state: web::Data<AppState>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ApiError> {
    let plan = input.validate()?;
    log::info!(
        "Generating {}-day itinerary {} -> {} via {} stop(s)",
        plan.total_days(),
        plan.origin,
        plan.destination,
        plan.stops.len()
    );

    let itinerary = state.itineraries.generate(&plan).await;
    Ok(HttpResponse::Ok().json(itinerary))
}
