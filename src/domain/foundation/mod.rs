//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and number formatting that form the vocabulary of the
//! Micro Decision domain.

mod ids;
mod number;

pub use ids::{ChartHandle, InvocationId};
pub use number::display_number;
