pub mod health;
pub mod index;
pub mod version;
pub mod fallback;

pub use health::{health_handler, versioned_health_handler};
pub use index::{index_handler, service_handler};
pub use version::version_handler;
pub use fallback::not_found_handler;
