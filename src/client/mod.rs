//! HTTP transport for the verification service.

pub mod http;
