pub const APP_NAME: &str = "framestep";

pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const WINDOW_NAME: &str = "Video";

/// Width of the on-screen image; height follows the source aspect ratio.
pub const DISPLAY_WIDTH: i32 = 1280;

pub const DEFAULT_SAVE_DIR_NAME: &str = "frames";
pub const SAVED_FRAME_EXTENSION: &str = "png";

// Overlay text placement, in source pixels
pub const REAL_TIME_TEXT_ORIGIN: (i32, i32) = (10, 60);
pub const FRAME_TEXT_ORIGIN: (i32, i32) = (10, 120);
pub const OVERLAY_FONT_SCALE: f64 = 1.5;
pub const OVERLAY_THICKNESS: i32 = 3;

// highgui wait slices in milliseconds
pub const IMMEDIATE_WAIT_MS: i32 = 1;
pub const BLOCKING_WAIT_SLICE_MS: i32 = 50;

pub const KEY_SPACE: i32 = b' ' as i32;
pub const KEY_STEP_BACK: i32 = b'a' as i32;
pub const KEY_STEP_FORWARD: i32 = b'd' as i32;
pub const KEY_QUIT: i32 = b'q' as i32;
pub const KEY_RETURN: i32 = b'\r' as i32;
pub const KEY_NEWLINE: i32 = b'\n' as i32;

/// Decodes slower than this are written to the debug log.
pub const SLOW_DECODE_MS: u128 = 10;
