//! Core types and utilities for the aac-portal client.
//!
//! This crate provides the error handling foundation and the location types
//! shared by the router and the web application.

pub mod error;
pub mod location;

pub use error::Result;
pub use location::{BasePath, Location, ParseLocationError};
