//! Page components.

mod login;
mod register;
mod sensor_detail;
mod sensors;

pub use login::LoginPage;
pub use register::RegisterPage;
pub use sensor_detail::SensorDetailPage;
pub use sensors::SensorsPage;
