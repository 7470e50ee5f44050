//! Edge device management node library
//!
//! This crate provides the core functionality for:
//! - Domain records for instances, services, layers, monitoring,
//!   alerts, env vars and logs
//! - Bidirectional domain/wire conversion with validation
//! - Bounded-capacity collections with overflow provenance
//! - Instance permission registration over mTLS gRPC
//! - Temporary directory creation

pub mod bounded;
pub mod convert;
pub mod error;
pub mod fs;
pub mod iam;
pub mod models;
pub mod proto;

pub use bounded::{transfer_all, BoundedVec};
pub use error::ConversionError;
pub use models::*;
