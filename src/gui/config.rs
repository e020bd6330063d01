use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const CELL_SIZE: f32 = 16.;
    pub const BOARD_WIDTH_PX: f32 = 960.;
    pub const BOARD_HEIGHT_PX: f32 = 600.;

    pub const DELAY_MS: u64 = 150;
    pub const MIN_DELAY_MS: u64 = 30;
    pub const MAX_DELAY_MS: u64 = 2000;
    pub const SCHEDULER_FPS: f64 = 50.;
    pub const RANDOM_FILL_RATE: f64 = 0.3;

    pub const DRAW_GRID: bool = true;
    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;
    pub const GRID_COLOR: Color32 = Color32::from_gray(0xee);
    pub const CELL_COLOR: Color32 = Color32::BLACK;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const WIDGET_GAP: f32 = 20.;
}
