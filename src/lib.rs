pub mod batch;
pub mod color;
pub mod config;
pub mod error;
pub mod render;
pub mod shape;

// Curated re-exports
pub use batch::{icon_file_name, write_all, write_batch};
pub use color::Color;
pub use config::{IconConfig, DEFAULT_SIZES};
pub use error::IconError;
pub use render::{render, render_spec};
