//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, number display)
//! - `analysis` - Decision form, analysis request/response, output projection
//! - `catalog` - The selectable micro decisions

pub mod analysis;
pub mod catalog;
pub mod foundation;
