//! Configuration module that turns options into launcher settings

mod cli;
mod env;
mod settings;

pub use cli::RawOpts;
pub use env::{DISPLAY_VAR, OPTIONS_VAR};
pub use settings::{Settings, DEFAULT_LINES};

use log::debug;

/// Build the launcher settings from the process environment and the
/// real command line.
///
/// The environment pass runs first, then the command-line pass; both
/// write the same slots, so command-line options win.
pub fn init_config() -> Settings {
    let env_opts = std::env::var(OPTIONS_VAR).ok();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    init_config_from(&args, env_opts.as_deref())
}

/// Same as [`init_config`], but over an explicit argument list and
/// option string.
pub fn init_config_from(args: &[&str], env_opts: Option<&str>) -> Settings {
    let env_pass = match env_opts {
        Some(raw) if !raw.is_empty() => env::parse_opts_string(raw),
        _ => RawOpts::default(),
    };
    let cli_pass = cli::parse_tokens(args);
    let settings = Settings::new(cli_pass, env_pass);
    debug!("effective configuration: {:?}", settings);
    settings
}
