//! Adapters - implementations of ports plus the HTTP and CLI surfaces.

pub mod export;
pub mod http;
pub mod payment;
pub mod store;
