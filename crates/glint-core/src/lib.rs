pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod glow;
pub mod modal;
pub mod motion;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod signal;
pub mod spotlight;
pub mod tilt;
pub mod viewport;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use glow::*;
pub use modal::*;
pub use motion::*;
pub use pointer::*;
pub use reveal::*;
pub use scroll::*;
pub use signal::*;
pub use spotlight::*;
pub use tilt::*;
pub use viewport::*;
