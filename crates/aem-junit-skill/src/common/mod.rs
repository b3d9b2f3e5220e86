//! Color handling and tracing setup shared by the application layer.

mod color;
pub mod telemetry;

pub use color::Colors;
pub use color::init as color_init;
