//! Contentful Content Delivery API: HTTP client, query building, link
//! resolution and mapping of raw entries into [`contracts`] recipes.

pub mod client;
pub mod error;
pub mod includes;
pub mod mapping;
pub mod query;

pub use client::ContentfulClient;
pub use error::ContentfulError;
pub use query::EntriesQuery;
