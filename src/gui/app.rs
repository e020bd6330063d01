use super::{Config, Pacer};
use crate::{Board, Session, Step};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin, Rect, Vec2};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) session: Session,          // Board run and its scheduler state.
    pub(super) epoch: Instant,            // Time origin for scheduler polls.
    pub(super) paint_state: Option<bool>, // Cell state painted by the current drag gesture.
    pub(super) board_rect: Option<Rect>,  // Part of the window displaying the board.
    pub(super) last_derive_duration: f64, // Duration of the last derivation in seconds.
    pub(super) delay_ms: u64,             // Pause between shown generations.
    pub(super) draw_grid: bool,           // Whether to draw gridlines over the board.
    pub(super) pacer: Pacer,              // Keeps polls near the firing period.
}

impl App {
    pub fn new() -> Self {
        let rows = (Config::BOARD_HEIGHT_PX / Config::CELL_SIZE).ceil() as usize;
        let cols = (Config::BOARD_WIDTH_PX / Config::CELL_SIZE).ceil() as usize;
        let session = Session::new(
            Board::blank(rows, cols),
            Duration::from_millis(Config::DELAY_MS),
        );
        Self {
            delay_ms: session.delay().as_millis() as u64,
            session,
            epoch: Instant::now(),
            paint_state: None,
            board_rect: None,
            last_derive_duration: 0.,
            draw_grid: Config::DRAW_GRID,
            pacer: Pacer::new(Config::SCHEDULER_FPS),
        }
    }

    pub(super) fn toggle_running(&mut self) {
        if self.session.is_running() {
            self.session.stop();
        } else {
            self.paint_state = None;
            self.session.start(self.epoch.elapsed());
        }
    }

    pub(super) fn step_once(&mut self) {
        let timer = Instant::now();
        self.session.step_once();
        self.last_derive_duration = timer.elapsed().as_secs_f64();
    }

    pub(super) fn clear_board(&mut self) {
        let board = self.session.board();
        let blank = Board::blank(board.rows(), board.cols());
        self.session.reset(blank);
        self.last_derive_duration = 0.;
    }

    pub(super) fn randomize_board(&mut self) {
        let board = self.session.board();
        let mut random = Board::blank(board.rows(), board.cols());
        random.randomize(None, Config::RANDOM_FILL_RATE);
        self.session.reset(random);
        self.last_derive_duration = 0.;
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let (do_step, toggle_run) = ctx.input(|input| {
            (
                input.key_pressed(Key::Space),
                input.key_pressed(Key::E) && !input.modifiers.ctrl,
            )
        });
        if do_step && !self.session.is_running() {
            self.step_once();
        }
        if toggle_run {
            self.toggle_running();
        }
    }

    /// Maps a position relative to the board's left top corner to cell
    /// coordinates. Positions on or beyond the leading edges map below
    /// zero and are discarded.
    fn cell_at(&self, offset: Vec2) -> Option<(usize, usize)> {
        let row = (offset.y / Config::CELL_SIZE).ceil() as isize - 1;
        let col = (offset.x / Config::CELL_SIZE).ceil() as isize - 1;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        let board = self.session.board();
        if row >= board.rows() || col >= board.cols() {
            return None;
        }
        Some((row, col))
    }

    fn edit_cells(&mut self, ctx: &Context, board_rect: Rect) {
        if self.session.is_running() {
            self.paint_state = None;
            return;
        }
        ctx.input(|input| {
            if !input.pointer.primary_down() {
                self.paint_state = None;
                return;
            }
            let Some(pos) = input.pointer.latest_pos() else {
                return;
            };
            if input.pointer.primary_pressed() {
                // A paint gesture only begins on the board itself.
                if !board_rect.contains(pos) {
                    return;
                }
                if let Some((row, col)) = self.cell_at(pos - board_rect.left_top()) {
                    let state = self.session.board_mut().toggle_cell(row, col);
                    self.paint_state = Some(state);
                }
            } else if let Some(state) = self.paint_state {
                if let Some((row, col)) = self.cell_at(pos - board_rect.left_top()) {
                    self.session.board_mut().set_cell_if_different(row, col, state);
                }
            }
        });
    }

    fn advance_session(&mut self) {
        let timer = Instant::now();
        if self.session.poll(self.epoch.elapsed()) == Step::Derived {
            self.last_derive_duration = timer.elapsed().as_secs_f64();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                // editing the board with the pointer
                if let Some(board_rect) = self.board_rect {
                    self.edit_cells(ctx, board_rect);
                }

                self.draw(ui);

                self.advance_session();
            });

        self.pacer.wait();
    }
}
