pub mod choice;
pub mod game;
pub mod input;
pub mod report;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use choice::{Choice, Outcome};
pub use game::{play, play_once, Event, Match};

/// Logs go to stderr so they never interleave with the game on stdout.
/// Defaults to `warn`; override with `RUST_LOG`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
