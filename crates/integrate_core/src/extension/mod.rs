//! Extension registration contracts.
//!
//! Extensions identify themselves by a unique name and contribute task
//! definitions through a deferred hook fired once by the bootstrap.

pub mod hook;
pub mod registry;
