//! Provider Implementations - Device Manager
//!
//! Concrete adapters behind the domain ports: cache backends
//! ([`cache::MokaCacheProvider`], [`cache::RedisCacheProvider`],
//! [`cache::NullCacheProvider`]) and device stores
//! ([`store::InMemoryDeviceStore`]).
//!
//! Every provider registers itself into the application-layer registries
//! via linkme distributed slices, so linking this crate is enough to make
//! the backends resolvable by name.

pub mod cache;
pub mod store;
