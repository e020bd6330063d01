use super::{App, Config};
use eframe::egui::{
    pos2, Button, Checkbox, Painter, Rect, RichText, Sense, Slider, Stroke, Ui, Vec2,
};
use std::time::Duration;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui) {
        let text = if self.session.is_running() {
            "Stop"
        } else {
            "Start"
        };
        if ui.add(Self::new_button(text)).clicked() {
            self.toggle_running();
        }

        ui.add_enabled(!self.session.is_running(), |ui: &mut Ui| {
            if ui.add(Self::new_button("Next step")).clicked() {
                self.step_once();
            }

            ui.horizontal(|ui| {
                if ui.add(Self::new_button("Clear")).clicked() {
                    self.clear_board();
                }
                if ui.add(Self::new_button("Random")).clicked() {
                    self.randomize_board();
                }
            })
            .response
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Delay: "));
            if ui
                .add(
                    Slider::new(&mut self.delay_ms, Config::MIN_DELAY_MS..=Config::MAX_DELAY_MS)
                        .logarithmic(true)
                        .suffix(" ms"),
                )
                .changed()
            {
                self.session.set_delay(Duration::from_millis(self.delay_ms));
            }
        });

        ui.add(Checkbox::new(
            &mut self.draw_grid,
            Self::new_text("Gridlines"),
        ));
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let board = self.session.board();
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            board.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            board.population()
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.pacer.fps().round() as u32
        )));
        ui.label(Self::new_text(&format!(
            "Last step: {:.3} ms",
            self.last_derive_duration * 1e3
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            let aw = ui.available_width();

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_run_controls(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });

            ui.horizontal(|ui| {
                ui.group(|ui| {
                    ui.vertical(|ui| {
                        self.draw_stats(ui);
                    });

                    // to adjust the bounds
                    ui.add_space((Config::CONTROL_PANEL_WIDTH - aw + ui.available_width()).max(0.));
                });
            });
        });
    }

    fn draw_grid_lines(&self, painter: &Painter, rect: Rect) {
        let stroke = Stroke::new(1., Config::GRID_COLOR);
        let mut x = rect.left() + Config::CELL_SIZE;
        while x < rect.right() {
            painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
            x += Config::CELL_SIZE;
        }
        let mut y = rect.top() + Config::CELL_SIZE;
        while y < rect.bottom() {
            painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], stroke);
            y += Config::CELL_SIZE;
        }
        painter.rect_stroke(rect, 0., stroke);
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let board = self.session.board();
        let size = Vec2::new(
            board.cols() as f32 * Config::CELL_SIZE,
            board.rows() as f32 * Config::CELL_SIZE,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0., Config::BACKGROUND_COLOR);

        if self.draw_grid {
            self.draw_grid_lines(&painter, rect);
        }

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                if !board.is_alive(row, col) {
                    continue;
                }
                let min = pos2(
                    rect.left() + col as f32 * Config::CELL_SIZE,
                    rect.top() + row as f32 * Config::CELL_SIZE,
                );
                let cell = Rect::from_min_size(min, Vec2::splat(Config::CELL_SIZE));
                painter.rect_filled(cell, 0., Config::CELL_COLOR);
            }
        }

        self.board_rect.replace(rect);
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::WIDGET_GAP);

            self.draw_board(ui);
        });
    }
}
