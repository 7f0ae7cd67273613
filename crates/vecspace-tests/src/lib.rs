//! Integration tests for vecspace crates.
//!
//! These tests drive both vector kinds through the shared [`Vector`] trait
//! and check the cross-kind conversions end to end.
//!
//! [`Vector`]: vecspace_math::Vector
