//! deltae - perceptual color difference
//!
//! Command-line front end for the `color-pipeline` crate.
//! This library exposes modules for integration testing.

pub mod config;
pub mod diff;
pub mod error;
pub mod image;
pub mod metric;
pub mod space;
