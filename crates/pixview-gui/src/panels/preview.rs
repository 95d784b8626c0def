use pixview_core::preview::PreviewAction;

use crate::app::PixviewApp;
use crate::host::ScrollHost;
use crate::icons::{icon_button, Icon};

const BACKDROP: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);

/// Full-window preview overlay: close bar, scrollable image, zoom bar.
pub fn show(ctx: &egui::Context, app: &mut PixviewApp, shortcut: Option<PreviewAction>) {
    let mut action = shortcut;

    egui::TopBottomPanel::top("preview_top_bar").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if icon_button(ui, Icon::Close, "Close").clicked() {
                action = Some(PreviewAction::Close);
            }
        });
    });

    let zoom_label = app
        .session
        .preview()
        .map(|preview| preview.zoom_label())
        .unwrap_or_default();

    egui::TopBottomPanel::bottom("preview_bottom_bar").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                if icon_button(ui, Icon::Minus, "Zoom out").clicked() {
                    action = Some(PreviewAction::ZoomOut);
                }
                if ui
                    .add(egui::Button::new(zoom_label.as_str()).min_size(egui::vec2(64.0, 32.0)))
                    .on_hover_text("Reset zoom")
                    .clicked()
                {
                    action = Some(PreviewAction::ResetZoom);
                }
                if icon_button(ui, Icon::Plus, "Zoom in").clicked() {
                    action = Some(PreviewAction::ZoomIn);
                }
            });
        });
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BACKDROP))
        .show(ctx, |ui| {
            show_image(ui, app, action);
        });
}

fn show_image(ui: &mut egui::Ui, app: &mut PixviewApp, action: Option<PreviewAction>) {
    let (Some(view), Some(preview)) = (app.view.as_mut(), app.session.preview()) else {
        return;
    };

    let mut host = ScrollHost::new(
        ui.available_size(),
        preview.natural_size(),
        preview.scale(),
        view.scroll_offset,
    );

    app.session.mount_if_needed(&mut host);
    if let Some(action) = action {
        app.session.apply(action, &mut host);
    }
    if !app.session.is_open() {
        return;
    }

    let mut area = egui::ScrollArea::both().auto_shrink([false, false]);
    if let Some(offset) = host.scrolled_offset() {
        area = area.scroll_offset(offset);
    }

    let size = host.displayed_size();
    let texture_id = view.texture.id();
    let output = area.show(ui, |ui| {
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        ui.painter().image(
            texture_id,
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    });
    view.scroll_offset = output.state.offset;
}
