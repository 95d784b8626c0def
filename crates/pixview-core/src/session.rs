use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::loader::{FileInput, LoadRequest, LoadTicket};
use crate::preview::{PreviewAction, PreviewHost, PreviewSurface};
use crate::source::ImageSource;

/// What happened to a finished load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image replaced whatever preview was open.
    Opened,
    /// Reading or decoding failed; nothing changed.
    Failed,
    /// A newer selection was made while this one was loading.
    Superseded,
}

/// Top-level coordinator: owns the selection control and the open preview.
#[derive(Debug)]
pub struct PreviewSession {
    config: ViewerConfig,
    input: FileInput,
    preview: Option<PreviewSurface>,
}

impl PreviewSession {
    pub fn new(config: ViewerConfig) -> Self {
        let input = FileInput::new(config.accepted_extensions.clone());
        Self {
            config,
            input,
            preview: None,
        }
    }

    pub fn input(&self) -> &FileInput {
        &self.input
    }

    /// A file was picked. Returns the load to start, if the pick changed the
    /// control's value.
    pub fn select_file(&mut self, path: PathBuf) -> Option<LoadRequest> {
        let request = self.input.select(path)?;
        info!(
            path = %request.path.display(),
            generation = request.ticket.generation(),
            "loading image"
        );
        Some(request)
    }

    /// Apply the result of a load started by [`Self::select_file`].
    ///
    /// The selection control is reset whatever the outcome. Failures are
    /// logged once and otherwise leave the session untouched.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<ImageSource>) -> LoadOutcome {
        self.input.reset();

        let source = match result {
            Ok(source) => source,
            Err(e) => {
                error!(generation = ticket.generation(), "failed to load image: {e}");
                return LoadOutcome::Failed;
            }
        };

        if ticket != self.input.latest() {
            debug!(
                generation = ticket.generation(),
                latest = self.input.latest().generation(),
                "discarding superseded load"
            );
            return LoadOutcome::Superseded;
        }

        self.preview = Some(PreviewSurface::new(source, &self.config));
        LoadOutcome::Opened
    }

    pub fn is_open(&self) -> bool {
        self.preview.is_some()
    }

    pub fn preview(&self) -> Option<&PreviewSurface> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut PreviewSurface> {
        self.preview.as_mut()
    }

    /// Mount a freshly opened preview once the host can report its bounds.
    pub fn mount_if_needed(&mut self, host: &mut impl PreviewHost) {
        if let Some(preview) = self.preview.as_mut() {
            if !preview.is_mounted() {
                preview.mount(host);
            }
        }
    }

    /// Route an action from the preview controls.
    pub fn apply(&mut self, action: PreviewAction, host: &mut impl PreviewHost) {
        if action == PreviewAction::Close {
            self.close();
            return;
        }
        if let Some(preview) = self.preview.as_mut() {
            preview.apply(action, host);
        }
    }

    pub fn close(&mut self) {
        if self.preview.take().is_some() {
            debug!("preview closed");
        }
    }
}
