/// Width/height pair in display pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scaled(self, scale: f32) -> Self {
        Self::new(self.width * scale, self.height * scale)
    }

    /// True if either axis has no extent.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Scroll adjustment applied to the preview container, in display pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    pub dx: f32,
    pub dy: f32,
}

impl ScrollDelta {
    pub const NONE: ScrollDelta = ScrollDelta { dx: 0.0, dy: 0.0 };

    /// Half the signed growth between two rendered sizes on each axis.
    ///
    /// The image is anchored at the container's top-left corner, so scrolling
    /// by half of the growth keeps the visual center where it was.
    pub fn centering(before: Size, after: Size) -> Self {
        Self {
            dx: (after.width - before.width) / 2.0,
            dy: (after.height - before.height) / 2.0,
        }
    }
}
