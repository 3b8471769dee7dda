pub mod answer;
pub mod instrument;
pub mod scoring;
pub mod store;
