#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchpad;
pub mod stroke;
pub mod viewport;

pub use app::SketchpadApp;
pub use config::SketchConfig;
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use history::StrokeHistory;
pub use input::{PointerEvent, PointerTracker};
pub use preview::ToolPreview;
pub use renderer::Renderer;
pub use sketchpad::Sketchpad;
pub use stroke::{Point, Stroke, StrokeId, Thickness};
pub use viewport::CanvasViewport;
