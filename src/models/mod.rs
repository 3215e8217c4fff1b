pub mod attraction;
pub mod itinerary;
pub mod package;
pub mod place;
pub mod route;
pub mod tips;
pub mod transport;
pub mod trip;
pub mod user;
pub mod weather;
