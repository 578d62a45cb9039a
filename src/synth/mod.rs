pub mod identity;
pub mod synthesizer;
pub mod testcase_model;
pub mod tracker;
