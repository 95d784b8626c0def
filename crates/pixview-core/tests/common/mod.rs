#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pixview_core::geometry::{ScrollDelta, Size};
use pixview_core::preview::PreviewHost;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// In-memory scroll container that lays out synchronously.
#[derive(Debug, Default)]
pub struct TestHost {
    pub viewport: Size,
    pub natural: Size,
    pub scale: f32,
    pub offset: ScrollDelta,
    pub scrolls: Vec<ScrollDelta>,
}

impl TestHost {
    pub fn new(viewport: Size, natural: Size) -> Self {
        Self {
            viewport,
            natural,
            ..Default::default()
        }
    }
}

impl PreviewHost for TestHost {
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
        self.offset.dx += delta.dx;
        self.offset.dy += delta.dy;
        self.scrolls.push(delta);
    }
}

/// Write a solid RGBA PNG into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]))
        .save(&path)
        .expect("write png");
    path
}

#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run `f` and count the error-level events it emits.
pub fn count_errors<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.0.load(Ordering::SeqCst))
}
