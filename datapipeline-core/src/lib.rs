//! Data Pipeline Core
//!
//! Wire-format types for the AWS Data Pipeline JSON protocol.
//!
//! This crate contains only data shapes: every request and response of the
//! service's operation set, expressed as serde-annotated DTOs. Transport,
//! signing and error handling live in `datapipeline-client`.

pub mod dto;
