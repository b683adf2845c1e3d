//! Assessment service API boundary.
//!
//! The viewer talks to the service exclusively through the [`ResponseApi`]
//! trait so workflows can be exercised against in-memory fakes.

pub mod client;

pub use client::{ApiError, HttpResponseApi, ResponseApi};
