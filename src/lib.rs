//! optval: command-line option validation and normalization
//!
//! A library for validating raw option values against per-option
//! constraints and writing their canonical form into an option store.

pub mod config;
pub mod handler;
pub mod prefs;
pub mod registry;
pub mod store;
