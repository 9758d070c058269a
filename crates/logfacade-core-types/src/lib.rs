//! Core types shared across the logfacade crates
//!
//! This crate provides foundational types used by both the error facility
//! and the logging facade:
//!
//! - **Level**: the three severities a logger can emit at
//! - **Schema constants**: canonical field keys used by structured backends

pub mod level;
pub mod schema;

pub use level::{Level, ParseLevelError};
