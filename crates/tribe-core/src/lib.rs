//! # Tribe Core
//!
//! The domain layer of the Tribe backend.
//! This crate contains the aggregates, their mutation rules, and the ports
//! that infrastructure must implement - with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
