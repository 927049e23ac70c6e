//! CLI command implementations

pub mod budget;
pub mod rules;
pub mod slots;
pub mod validate;
