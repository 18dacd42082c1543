//! Command-line front-end for the Almanac calendar utilities.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
