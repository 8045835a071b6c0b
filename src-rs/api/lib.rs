pub use crate::config::AppConfig;
pub use crate::error::RotationError;
pub use crate::result::Selection;
pub use crate::rotation_app::RotationApp;

pub mod handlers;
pub mod server;
