pub mod a001_recipe;
pub mod newsletter;
pub mod sitemap;
