pub mod builders;
pub mod transformers;
