//! Utility modules
//!
//! - `alias_naming`: generated projection alias names

pub mod alias_naming;
