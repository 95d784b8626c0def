use std::path::PathBuf;

use pixview_core::error::Result;
use pixview_core::loader::LoadTicket;
use pixview_core::source::DecodedImage;

/// Commands sent from UI thread to the loader thread.
pub enum WorkerCommand {
    /// Read a file into a data URI and decode it.
    Load { path: PathBuf, ticket: LoadTicket },
}

/// Results sent back to the UI thread.
pub enum WorkerResult {
    /// The picker dialog returned a file.
    FileChosen { path: PathBuf },

    Loaded {
        ticket: LoadTicket,
        result: Result<DecodedImage>,
    },
}
