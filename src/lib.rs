#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod dialogs;
pub mod export;
pub mod panels;
pub mod render;
pub mod session;
pub mod surface;

pub use app::PaintApp;
pub use brush::Brush;
pub use dialogs::{DialogService, NativeDialogs};
pub use export::SaveError;
pub use render::render_to_image;
pub use session::{DrawingSession, SessionEvents};
pub use surface::{Mark, Surface};
