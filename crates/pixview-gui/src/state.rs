/// Display state for the open preview.
pub struct PreviewView {
    pub texture: egui::TextureHandle,
    /// Scroll offset reported by the scroll area on the last frame.
    pub scroll_offset: egui::Vec2,
}

impl PreviewView {
    pub fn new(texture: egui::TextureHandle) -> Self {
        Self {
            texture,
            scroll_offset: egui::Vec2::ZERO,
        }
    }
}
