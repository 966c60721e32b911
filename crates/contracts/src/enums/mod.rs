pub mod change_frequency;
pub mod difficulty;
