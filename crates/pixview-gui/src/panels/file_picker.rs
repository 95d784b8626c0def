use crate::app::PixviewApp;
use crate::messages::WorkerResult;
use crate::worker::send;

pub fn show(ctx: &egui::Context, app: &mut PixviewApp) {
    egui::TopBottomPanel::top("file_picker").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Choose image...").clicked() {
                open_dialog(ctx, app);
            }
            match app.session.input().value() {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.weak("No file chosen"),
            };
        });
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.centered_and_justified(|ui| {
            ui.label(
                egui::RichText::new("Choose an image to preview")
                    .size(18.0)
                    .color(egui::Color32::from_gray(100)),
            );
        });
    });
}

/// Show the native picker, restricted to the accepted image extensions.
pub fn open_dialog(ctx: &egui::Context, app: &PixviewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    let extensions = app.session.input().accept().to_vec();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &extensions[..])
            .pick_file()
        {
            send(&result_tx, &ctx, WorkerResult::FileChosen { path });
        }
    });
}
