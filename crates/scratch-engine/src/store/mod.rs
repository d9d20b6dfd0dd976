pub mod collection;
pub mod generator;
