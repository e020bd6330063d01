#![warn(clippy::all)]

mod board;
mod gui;
mod session;

pub use board::Board;
pub use gui::{App, Config};
pub use session::{Session, Step};
