mod canvas;
mod toolbar;

pub use canvas::canvas_panel;
pub use toolbar::toolbar;
