use pixview_core::geometry::{ScrollDelta, Size};
use pixview_core::preview::PreviewHost;

/// One frame's view of the preview scroll area.
///
/// egui lays out immediately, so the rendered size is a pure function of the
/// committed scale and `apply_scale` takes effect before it returns.
pub struct ScrollHost {
    viewport: Size,
    natural: Size,
    scale: f32,
    offset: egui::Vec2,
    scrolled: bool,
}

impl ScrollHost {
    pub fn new(viewport: egui::Vec2, natural: Size, scale: f32, offset: egui::Vec2) -> Self {
        Self {
            viewport: Size::new(viewport.x, viewport.y),
            natural,
            scale,
            offset,
            scrolled: false,
        }
    }

    pub fn displayed_size(&self) -> egui::Vec2 {
        let size = self.rendered_size();
        egui::vec2(size.width, size.height)
    }

    /// Offset to force on the scroll area if the preview scrolled this frame.
    pub fn scrolled_offset(&self) -> Option<egui::Vec2> {
        self.scrolled.then_some(self.offset)
    }

    fn max_offset(&self) -> egui::Vec2 {
        let content = self.rendered_size();
        egui::vec2(
            (content.width - self.viewport.width).max(0.0),
            (content.height - self.viewport.height).max(0.0),
        )
    }
}

impl PreviewHost for ScrollHost {
    fn viewport_bounds(&self) -> Size {
        self.viewport
    }

    fn rendered_size(&self) -> Size {
        self.natural.scaled(self.scale)
    }

    fn apply_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn scroll_by(&mut self, delta: ScrollDelta) {
        let target = self.offset + egui::vec2(delta.dx, delta.dy);
        self.offset = target.clamp(egui::Vec2::ZERO, self.max_offset());
        self.scrolled = true;
    }
}
