use tracing::debug;

use crate::config::ViewerConfig;
use crate::geometry::{ScrollDelta, Size};
use crate::source::ImageSource;

/// The rendering side of the preview: a scroll container holding the image.
///
/// `apply_scale` must commit synchronously. `update_scale` measures the
/// rendered size right after calling it, so a host that defers layout to a
/// later frame would report the old size and break the centering.
pub trait PreviewHost {
    /// Current bounds of the scroll container.
    fn viewport_bounds(&self) -> Size;

    /// Size the image is rendered at right now.
    fn rendered_size(&self) -> Size;

    fn apply_scale(&mut self, scale: f32);

    fn scroll_by(&mut self, delta: ScrollDelta);
}

/// User-triggered operations on an open preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewAction {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Close,
}

/// Largest scale that keeps `natural` inside `viewport`, capped at `cap`.
pub fn fit_scale(viewport: Size, natural: Size, cap: f32) -> f32 {
    if natural.is_empty() {
        return cap;
    }
    let height_ratio = viewport.height / natural.height;
    let width_ratio = viewport.width / natural.width;
    height_ratio.min(width_ratio).min(cap).max(0.0)
}

/// Zoom state for one mounted image.
#[derive(Clone, Debug)]
pub struct PreviewSurface {
    source: ImageSource,
    scale: f32,
    mounted: bool,
    zoom_step: f32,
    max_fit_scale: f32,
    max_scale: Option<f32>,
}

impl PreviewSurface {
    pub fn new(source: ImageSource, config: &ViewerConfig) -> Self {
        Self {
            source,
            scale: 0.0,
            mounted: false,
            zoom_step: config.zoom_step,
            max_fit_scale: config.max_fit_scale,
            max_scale: config.max_scale,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn natural_size(&self) -> Size {
        self.source.natural
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Size the image should be drawn at for the current scale.
    pub fn displayed_size(&self) -> Size {
        self.source.natural.scaled(self.scale)
    }

    /// Label for the reset-zoom control, e.g. `"50%"`.
    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.scale * 100.0).round() as i64)
    }

    /// First layout with a known viewport: fit the image to it.
    pub fn mount(&mut self, host: &mut impl PreviewHost) {
        self.mounted = true;
        self.fit_to_screen(host);
    }

    pub fn fit_to_screen(&mut self, host: &mut impl PreviewHost) -> f32 {
        let scale = fit_scale(
            host.viewport_bounds(),
            self.source.natural,
            self.max_fit_scale,
        );
        self.commit(host, scale);
        scale
    }

    pub fn zoom_in(&mut self, host: &mut impl PreviewHost) -> ScrollDelta {
        self.update_scale(host, self.scale * self.zoom_step)
    }

    pub fn zoom_out(&mut self, host: &mut impl PreviewHost) -> ScrollDelta {
        self.update_scale(host, self.scale / self.zoom_step)
    }

    /// Rescale around the viewport center. Returns the scroll applied.
    pub fn update_scale(&mut self, host: &mut impl PreviewHost, scale: f32) -> ScrollDelta {
        let scale = self.bounded(scale);
        let before = host.rendered_size();

        self.commit(host, scale);

        let after = host.rendered_size();
        let delta = ScrollDelta::centering(before, after);
        host.scroll_by(delta);
        delta
    }

    /// Run a zoom action. `Close` is handled by the owning session.
    pub fn apply(&mut self, action: PreviewAction, host: &mut impl PreviewHost) -> ScrollDelta {
        match action {
            PreviewAction::ZoomIn => self.zoom_in(host),
            PreviewAction::ZoomOut => self.zoom_out(host),
            PreviewAction::ResetZoom => {
                self.fit_to_screen(host);
                ScrollDelta::NONE
            }
            PreviewAction::Close => ScrollDelta::NONE,
        }
    }

    /// Apply `max_scale` without ever pulling the scale below where it is
    /// now, so a zoom-in at the cap is a no-op rather than a shrink.
    fn bounded(&self, scale: f32) -> f32 {
        let scale = scale.max(0.0);
        match self.max_scale {
            Some(max) if scale > self.scale => scale.min(max.max(self.scale)),
            _ => scale,
        }
    }

    fn commit(&mut self, host: &mut impl PreviewHost, scale: f32) {
        self.scale = scale;
        host.apply_scale(scale);
        debug!(scale, "scale committed");
    }
}
