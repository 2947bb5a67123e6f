//! Infrastructure Layer - Device Manager
//!
//! Cross-cutting technical concerns: configuration loading (defaults →
//! TOML → environment), structured logging, error-context utilities, and
//! the factory that resolves providers from configuration and assembles
//! the device service.
//!
//! Linking this crate pulls in `dvm-providers`, which completes the
//! linkme registration of every cache and store backend.

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, CacheConfig, ConfigLoader, LoggingConfig, StoreConfig};
pub use di::ServiceFactory;
