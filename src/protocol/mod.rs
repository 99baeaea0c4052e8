//! Verification wire format.

pub mod models;
