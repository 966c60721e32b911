pub mod cache;
pub mod service;
pub mod source;

#[cfg(test)]
pub mod fixtures;
