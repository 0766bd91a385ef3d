/// Ordinal scale shared by every dimension
pub const SCALE_MIN: i32 = 0;
pub const SCALE_MAX: i32 = 10;

/// Default container layout (px)
pub const DEFAULT_WIDTH_PX: f64 = 640.0;
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 72.0;
pub const DEFAULT_ROW_GAP_PX: f64 = 16.0;
pub const DEFAULT_MARGIN_PX: f64 = 32.0;
pub const DEFAULT_TRACK_HEIGHT_PX: f64 = 20.0;

/// Environment override for the output directory
pub const ENV_OUTPUT_DIR: &str = "JOB_BALANCE_OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Report columns appended after the four dimension columns
pub const REPORT_BALANCED_HEADER: &str = "Balanced";
pub const REPORT_GAP_LEFT_HEADER: &str = "GapLeft";
pub const REPORT_GAP_RIGHT_HEADER: &str = "GapRight";

/// Status banner text
pub const BALANCED_TEXT: &str = "This job is balanced (X-test).";
pub const IMBALANCED_TEXT: &str = "This job is imbalanced (X-test).";
