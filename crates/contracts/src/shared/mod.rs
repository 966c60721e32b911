pub mod locale;
pub mod newsletter;
pub mod sitemap;
pub mod video;
