use std::path::PathBuf;
use std::sync::mpsc;

use pixview_core::config::ViewerConfig;
use pixview_core::error::Result;
use pixview_core::loader::LoadTicket;
use pixview_core::preview::PreviewAction;
use pixview_core::session::{LoadOutcome, PreviewSession};
use pixview_core::source::DecodedImage;
use tracing::info;

use crate::convert::{fit_texture_side, rgba_to_color_image};
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::PreviewView;
use crate::worker;

pub struct PixviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: PreviewSession,
    pub view: Option<PreviewView>,
}

impl PixviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            session: PreviewSession::new(config),
            view: None,
        }
    }

    /// Drain all pending results from the dialog and loader threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileChosen { path } => self.request_load(path),
                WorkerResult::Loaded { ticket, result } => self.finish_load(ctx, ticket, result),
            }
        }
    }

    fn request_load(&mut self, path: PathBuf) {
        if let Some(request) = self.session.select_file(path) {
            self.send_command(WorkerCommand::Load {
                path: request.path,
                ticket: request.ticket,
            });
        }
    }

    fn finish_load(&mut self, ctx: &egui::Context, ticket: LoadTicket, result: Result<DecodedImage>) {
        let (source, pixels) = match result {
            Ok(decoded) => (Ok(decoded.source), Some(decoded.pixels)),
            Err(e) => (Err(e), None),
        };

        if self.session.finish_load(ticket, source) != LoadOutcome::Opened {
            return;
        }
        if let Some(pixels) = pixels {
            let max_side = ctx.input(|i| i.max_texture_side);
            let fitted = fit_texture_side(&pixels, max_side);
            if fitted.dimensions() != pixels.dimensions() {
                info!(
                    from = ?pixels.dimensions(),
                    to = ?fitted.dimensions(),
                    max_side,
                    "downscaled texture to fit renderer limit"
                );
            }
            let texture = ctx.load_texture(
                "preview",
                rgba_to_color_image(&fitted),
                egui::TextureOptions::LINEAR,
            );
            self.view = Some(PreviewView::new(texture));
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Keyboard shortcuts. Opening is handled here, zoom keys are returned
    /// for the preview panel.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<PreviewAction> {
        let open = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
        if ctx.input_mut(|i| i.consume_shortcut(&open)) {
            panels::file_picker::open_dialog(ctx, self);
        }

        if !self.session.is_open() {
            return None;
        }

        ctx.input_mut(|i| {
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Plus)
                || i.consume_key(egui::Modifiers::NONE, egui::Key::Equals)
            {
                Some(PreviewAction::ZoomIn)
            } else if i.consume_key(egui::Modifiers::NONE, egui::Key::Minus) {
                Some(PreviewAction::ZoomOut)
            } else if i.consume_key(egui::Modifiers::NONE, egui::Key::Num0) {
                Some(PreviewAction::ResetZoom)
            } else if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                Some(PreviewAction::Close)
            } else {
                None
            }
        })
    }
}

impl eframe::App for PixviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let shortcut = self.handle_shortcuts(ctx);

        if self.session.is_open() {
            panels::preview::show(ctx, self, shortcut);
        } else {
            self.view = None;
            panels::file_picker::show(ctx, self);
        }
    }
}
