pub mod analyzer;
pub mod classifier;
pub mod extract;
pub mod page_model;
pub mod taxonomy;
