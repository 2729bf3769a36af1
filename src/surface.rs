use egui::{Color32, Pos2, Vec2};

/// Color the surface is cleared to.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A single filled circle drawn in response to one motion sample.
///
/// Marks are immutable once appended: they capture the brush color and size
/// in effect when the event arrived, so later brush changes never recolor
/// what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// Center in surface-local coordinates.
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
}

/// The persistent drawing area: fixed pixel dimensions plus the ordered
/// marks drawn onto it. The surface only records what was drawn;
/// rasterization lives in [`crate::render`].
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    marks: Vec<Mark>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as an egui vector, for widget layout.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn add_mark(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Discards every mark, returning to the initial blank state.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn is_blank(&self) -> bool {
        self.marks.is_empty()
    }
}

impl Default for Surface {
    /// The standard 800x600 canvas.
    fn default() -> Self {
        Self::new(800, 600)
    }
}
