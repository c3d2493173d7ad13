pub mod checks;
pub mod engine;
pub mod fetch;
pub mod report;

pub use engine::CardValidator;
