//! Micro Decision - Butterfly-effect decision analysis client
//!
//! This crate validates the decision form, sends it to the analysis service,
//! and renders capability, advice, pattern, and butterfly effect results to a
//! result surface and an impact bar chart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
