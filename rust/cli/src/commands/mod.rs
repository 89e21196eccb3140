//! Command handler modules for the handrank CLI.
//!
//! Each subcommand lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors returned as `CliError`

pub mod bench;
pub mod cfg;
pub mod compare;
pub mod deal;
pub mod eval;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
