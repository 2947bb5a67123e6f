//! Configuration types

pub mod app;
pub mod cache;
pub mod logging;
pub mod store;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use store::StoreConfig;
