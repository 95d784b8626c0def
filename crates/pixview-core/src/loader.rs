use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PixviewError, Result};
use crate::source::{DataUri, DecodedImage};

/// Identifies one load attempt. Later selections carry larger tickets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// A file chosen through the selection control, waiting to be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub path: PathBuf,
    pub ticket: LoadTicket,
}

/// The file-selection control.
///
/// Only a change of value fires a load, mirroring a native file input. The
/// control is reset after each attempt so picking the same file again is
/// still a change.
#[derive(Clone, Debug)]
pub struct FileInput {
    value: Option<PathBuf>,
    accept: Vec<String>,
    latest: LoadTicket,
}

impl FileInput {
    pub fn new(accept: Vec<String>) -> Self {
        Self {
            value: None,
            accept,
            latest: LoadTicket::default(),
        }
    }

    /// Extensions offered by the picker dialog. Advisory only: the loader
    /// does its own content check.
    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    pub fn value(&self) -> Option<&Path> {
        self.value.as_deref()
    }

    /// Ticket of the most recent selection.
    pub fn latest(&self) -> LoadTicket {
        self.latest
    }

    pub fn select(&mut self, path: PathBuf) -> Option<LoadRequest> {
        if self.value.as_deref() == Some(path.as_path()) {
            return None;
        }
        self.latest = LoadTicket(self.latest.0 + 1);
        self.value = Some(path.clone());
        Some(LoadRequest {
            path,
            ticket: self.latest,
        })
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Read a file and encode its full contents as a data URI.
///
/// The media type is sniffed from the content; files that are not a
/// recognised image format are rejected.
pub fn read_data_uri(path: &Path) -> Result<DataUri> {
    let bytes = std::fs::read(path)?;
    let format = image::guess_format(&bytes).map_err(|_| {
        PixviewError::UnsupportedMediaType(format!("{} is not a recognised image", path.display()))
    })?;
    Ok(DataUri::encode(format.to_mime_type(), &bytes))
}

/// Read, encode and decode a file in one go. Runs off the UI thread.
pub fn load(path: &Path) -> Result<DecodedImage> {
    let uri = read_data_uri(path)?;
    let decoded = DecodedImage::decode(uri)?;
    info!(
        path = %path.display(),
        width = decoded.source.natural.width,
        height = decoded.source.natural.height,
        media_type = decoded.source.uri.media_type(),
        "image loaded"
    );
    Ok(decoded)
}
