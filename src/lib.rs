//! GroundPass - membership and booking backend for a sports-ground
//! reservation platform.
//!
//! Users purchase membership plans, plan-based discounts apply to ground
//! bookings, and admin listing/statistics are exposed over HTTP and a
//! standalone CLI.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
