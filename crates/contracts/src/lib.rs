//! Shared types and pure logic used by both the backend and the frontend.
//!
//! Nothing in this crate performs I/O: recipe records come in already
//! fetched, and the sitemap comes out as a string for the caller to write.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
