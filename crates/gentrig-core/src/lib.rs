//! Trigger services for external code generators.
//!
//! This crate contains:
//! - Configuration structs for the two triggers
//! - The go-enum trigger (enum accessor/marshal codegen)
//! - The sqlc trigger (SQL-to-code compilation)
//! - Shared error types
//!
//! Both triggers are thin wrappers around an external tool invocation:
//! stage inputs, run the tool, report the output path. Neither inspects
//! the generated files themselves.

pub mod config;
pub mod enum_gen;
pub mod error;
pub mod sqlc;

pub use config::{EnumGenConfig, SqlcGenConfig};
pub use enum_gen::{EnumGenReport, EnumGenTrigger};
pub use error::{TriggerError, TriggerResult};
pub use sqlc::{SqlcGenReport, SqlcGenTrigger};
