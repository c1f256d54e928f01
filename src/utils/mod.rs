//! Utility functions.

pub mod code_generator;
