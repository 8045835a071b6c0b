pub mod config;
pub mod error;
pub mod helpers;
pub mod result;
pub mod rotation_app;

#[path = "rotation/lib.rs"]
pub mod rotation;
#[path = "store/lib.rs"]
pub mod store;
#[path = "api/lib.rs"]
pub mod api;

pub use config::AppConfig;
pub use error::RotationError;
pub use result::Selection;
pub use rotation_app::RotationApp;
