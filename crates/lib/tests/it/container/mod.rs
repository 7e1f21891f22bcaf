//! Container integration tests
//!
//! Tests for the recursive container, organized by surface: property and
//! index access, sequence operations, dot paths, raw conversion, serde and
//! custom kinds.

mod access_tests;
mod raw_tests;
mod sequence_tests;
mod serialization_tests;
