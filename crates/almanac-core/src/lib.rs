//! Shared configuration and error types for the Almanac workspace.

pub mod config;
pub mod error;
