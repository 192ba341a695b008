pub mod domain;
mod generator;
pub mod report;
mod rings;
mod service;
pub mod stats;

pub use generator::{generate_day_detail, generate_search_window, DETAIL_RADIUS_KM};
pub use rings::ring_for;
pub use service::{StrikeSearchService, StrikeSource, SyntheticStrikeSource};
