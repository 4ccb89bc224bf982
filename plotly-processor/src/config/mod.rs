pub mod init;
pub mod plotly_mappings;
