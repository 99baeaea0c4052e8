//! Launch policy.

pub mod decision;
