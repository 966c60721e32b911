pub mod executor;

pub use executor::{execute, render};
