pub mod details;
pub mod home;
pub mod list;
