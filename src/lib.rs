//! Technician payment engine for a home-services dispatch business.
//!
//! This crate converts the hours each technician has worked into a payment
//! using a tiered rate schedule, and builds a report ranking technicians by
//! computed pay. A thin HTTP API exposes both to the presentation layer.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
