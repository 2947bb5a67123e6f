//! Domain Layer - Device Manager
//!
//! Core business types for the device inventory: the [`entities::Device`]
//! entity, its value objects (state, version token, patch document,
//! pagination), the domain error taxonomy, and the port traits that the
//! orchestration layer consumes ([`ports::DeviceStore`],
//! [`ports::CacheProvider`]).
//!
//! This crate is pure: it depends on serde, thiserror, and async-trait only,
//! and has no knowledge of any concrete store or cache backend.

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Device, NewDevice};
pub use error::{Error, Result};
pub use value_objects::{
    DeviceFilter, DevicePatch, DeviceState, PageRequest, PatchDocument, PatchOp, PatchOperation,
    VersionToken,
};
