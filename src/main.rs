#![warn(clippy::all)]

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1300., 700.))
            .with_min_inner_size(vec2(650., 350.)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Ok(Box::new(lifeboard::App::new()))),
    )
}
