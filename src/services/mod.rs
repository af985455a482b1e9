pub mod builder;
pub mod providers;
pub mod resolver;
