//! # pravo-core
//!
//! Core types and error types for pravo.
//!
//! This crate provides the foundational types shared across all pravo crates:
//! - The incident entity and the draft used to create one
//! - Geographic coordinates with range validation
//! - Cross-cutting error types (validation, denied device capabilities)
//! - CLI response types

pub mod entities;
pub mod errors;
pub mod geo;
pub mod responses;
