pub mod data;
pub mod plot_configs;

pub use data::*;
pub use plot_configs::*;
