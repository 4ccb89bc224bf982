pub mod config;
pub mod font;
pub mod layout;
pub mod line;
pub mod scatter;
pub mod scatter_plot_data;
pub mod target_colors;
