//! Wearcheck CLI library.
//!
//! This crate provides the command implementations behind the `wearcheck`
//! binary: loading model statistics, building slot selections from
//! command-line arguments, and rendering validation reports.

pub mod commands;
pub mod input;
pub mod logging;
