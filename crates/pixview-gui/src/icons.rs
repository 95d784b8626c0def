/// Side length of the square icon buttons, in points.
const ICON_BUTTON_SIZE: f32 = 32.0;

/// Icons are authored on a 24x24 grid.
const DESIGN_GRID: f32 = 24.0;

#[derive(Clone, Copy, Debug)]
pub enum Icon {
    Close,
    Minus,
    Plus,
}

impl Icon {
    fn segments(self) -> &'static [[(f32, f32); 2]] {
        match self {
            Icon::Close => &[[(6.0, 18.0), (18.0, 6.0)], [(6.0, 6.0), (18.0, 18.0)]],
            Icon::Minus => &[[(4.5, 12.0), (19.5, 12.0)]],
            Icon::Plus => &[[(12.0, 4.5), (12.0, 19.5)], [(4.5, 12.0), (19.5, 12.0)]],
        }
    }

    pub fn paint(self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let unit = rect.width().min(rect.height()) / DESIGN_GRID;
        let origin = rect.center() - egui::vec2(DESIGN_GRID, DESIGN_GRID) * unit / 2.0;
        let stroke = egui::Stroke::new(1.5 * unit, color);
        let at = |(x, y): (f32, f32)| origin + egui::vec2(x, y) * unit;

        for &[from, to] in self.segments() {
            painter.line_segment([at(from), at(to)], stroke);
        }
    }
}

pub fn icon_button(ui: &mut egui::Ui, icon: Icon, hover_text: &str) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ICON_BUTTON_SIZE, ICON_BUTTON_SIZE),
        egui::Sense::click(),
    );

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        ui.painter()
            .rect_filled(rect, visuals.corner_radius, visuals.bg_fill);
        icon.paint(ui.painter(), rect.shrink(4.0), visuals.fg_stroke.color);
    }

    response.on_hover_text(hover_text)
}
