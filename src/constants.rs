// Window and canvas.
pub const WINDOW_TITLE: &str = "Lilac Chaser";
pub const SCREEN_WIDTH: usize = 1024;
pub const SCREEN_HEIGHT: usize = 1024;

// Assets, read from the working directory.
pub const SPRITE_FILE: &str = "blurred_disk.bmp";
pub const LABEL_FILE: &str = "msg-use-arrows.bmp";

// Ring geometry.
pub const N_CIRCLES: usize = 12;
pub const RADIUS: i32 = 40;
pub const DISTANCE: i32 = 300;

// Fixation cross.
pub const CROSS_HALF_LENGTH: i32 = 20;
pub const CROSS_WIDTH: i32 = 5;

// Colours, packed 0x00RRGGBB.
pub const BACKGROUND: u32 = 0x00_FF_FF_FF;
pub const CROSS_COLOR: u32 = 0x00_00_00_00;

// Frame timing. The step is one 60 Hz refresh tick.
pub const INITIAL_FRAME_PERIOD_MS: u64 = 100;
pub const FRAME_PERIOD_STEP_MS: u64 = 16;
pub const MIN_FRAME_PERIOD_MS: u64 = 16;
