//! bandtable CLI library.
//!
//! This crate provides the command implementations behind the `bandtable`
//! binary: bank generation, catalog listing, and bank inspection.

pub mod commands;
