//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.

mod payment_gateway;
mod record_store;

pub use payment_gateway::{PaymentGateway, PaymentOrder};
pub use record_store::RecordStore;
