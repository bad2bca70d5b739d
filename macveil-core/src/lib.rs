// Address control goes through Linux ioctls; fail early on other targets.
#[cfg(not(target_os = "linux"))]
compile_error!(
    "macveil-core is intended to be built on Linux only. Build with a Linux target (e.g. target_os = \"linux\")."
);

pub mod cli;
pub mod config;
pub mod operations;
pub mod output;

pub use cli::{Cli, Commands, OuiCommand, OutputFormat};
pub use config::{logs_disabled, logs_enabled, MacveilConfig};
pub use operations::{dispatch_command, dispatch_with, HandlerResult};
pub use output::render_text;
