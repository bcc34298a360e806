//! Payment gateway adapter.

mod gateway;

pub use gateway::HttpPaymentGateway;
