pub mod client;
pub mod image_generator;
pub mod suggestion_generator;
pub mod types;
