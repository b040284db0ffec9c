// Table geometry
pub const GRID_COLUMNS: u8 = 18;
pub const MAIN_ROWS: u8 = 7;
pub const TOTAL_ROWS: u8 = 9; // main grid + two f-block strips

// f-block strips: columns 1-2 hold the label, column 3 is a spacer
pub const STRIP_FIRST_COLUMN: u8 = 4;

// Remote assistant defaults
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "xiaomi/mimo-v2-flash:free";
pub const DEFAULT_REFERER: &str = "https://titan-periodic-table.com";
pub const DEFAULT_TITLE: &str = "Titan Periodic Table";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

// Window
pub const DEFAULT_WINDOW_WIDTH: u32 = 1440;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 900;
