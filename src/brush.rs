use egui::Color32;

/// The mutable (color, size) pair applied to new marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: Color32,
    size: u32,
}

impl Brush {
    /// Range the size slider offers. The slider enforces it; the brush
    /// stores whatever it is given.
    pub const MIN_SIZE: u32 = 1;
    pub const MAX_SIZE: u32 = 20;

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Radius, in pixels, of the next mark.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: 5,
        }
    }
}
