pub mod components;
pub mod i18n;
pub mod list_utils;
pub mod locale;
pub mod share;
