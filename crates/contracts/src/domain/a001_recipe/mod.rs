pub mod aggregate;
pub mod catalog;
pub mod dto;
