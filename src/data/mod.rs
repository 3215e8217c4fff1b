pub mod attractions;
pub mod cities;
pub mod distances;
pub mod tips;
