pub mod a001_recipe;
