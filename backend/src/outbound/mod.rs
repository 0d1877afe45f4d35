//! Outbound adapters implementing domain ports against infrastructure.

pub mod persistence;
