//! Application-layer ports
//!
//! The service interface consumed by boundary layers, and the registries
//! that provider crates register their backends into.

pub mod registry;
pub mod services;

pub use services::DeviceServiceInterface;
