//! DTOs mirroring the Data Pipeline JSON wire format
//!
//! Field names follow the service's camelCase wire names. Optional request
//! fields are omitted from the payload when unset; optional response fields
//! decode to their zero/empty value when absent, so the shapes stay
//! forward-compatible with fields this client does not declare.

pub mod object;
pub mod pipeline;
pub mod task;
