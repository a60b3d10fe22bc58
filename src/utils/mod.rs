//! Utility functions for identifier generation.
//!
//! This module provides helpers used across the application:
//!
//! - [`id_generator`] - Redirect and visitor identifier generation

pub mod id_generator;
