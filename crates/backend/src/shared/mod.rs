pub mod app_state;
pub mod config;
pub mod contentful;
pub mod rich_text;
