mod app;
mod config;
mod draw;
mod pacer;

pub use app::App;
pub use config::Config;
use pacer::Pacer;
