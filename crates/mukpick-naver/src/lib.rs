//! Client for the Naver open-API local search and image search endpoints.
//!
//! Both calls are single-attempt and fail open: a transport error, a non-2xx
//! status, or a malformed body degrades to an empty candidate list (or a
//! missing photo) with the technical cause logged. Quota and throttling are
//! the caller's concern.

pub mod client;
pub mod error;
pub mod types;

pub use client::{compose_query, NaverClient};
pub use error::NaverError;
pub use types::Restaurant;
