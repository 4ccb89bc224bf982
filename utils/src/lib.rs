pub mod json;
pub mod numbers;
