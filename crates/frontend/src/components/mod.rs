//! Reusable UI components.

mod chart;
mod loading;
mod pagination;
mod require_auth;
mod sensor_card;
mod stat_card;

pub use chart::ReadingsChart;
pub use loading::Loading;
pub use pagination::Pagination;
pub use require_auth::RequireAuth;
pub use sensor_card::SensorCard;
pub use stat_card::StatCard;
