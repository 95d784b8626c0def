/// Multiplier applied by one zoom-in step (and divisor for zoom-out).
pub const ZOOM_STEP: f32 = 1.1;

/// Fit-to-screen never enlarges the image past its natural size.
pub const MAX_FIT_SCALE: f32 = 1.0;

/// File extensions offered by the file-selection control.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico", "tga", "pnm", "qoi",
];

/// Initial window size in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PIXVIEW_CONFIG";

/// Config file looked up in the working directory when no override is set.
pub const DEFAULT_CONFIG_FILE: &str = "pixview.toml";
