// Application modes
pub mod oneshot;
pub mod repl;
pub mod setup;

pub use oneshot::{run_health_mode, run_history_mode, run_send_mode};
pub use repl::run_repl_mode;
pub use setup::build_session;
