//! Option parsing and menu configuration for a dynamic menu launcher.
//!
//! Options come from two sources parsed against one option table: the
//! `LMENU_OPTS` environment variable (a shell-tokenizable string) and
//! the real command line, in that order, so command-line options win.
//! The result is a [`Settings`] record that is pushed onto a menu
//! backend through the [`menu::Menu`] setter surface. Malformed input
//! is reported on stderr and never aborts startup.

pub mod config;
pub mod menu;

pub use config::{init_config, init_config_from, RawOpts, Settings};
pub use menu::{
    Align, Capabilities, ColorMap, ColorRole, FilterMode, Menu, Monitor, PasswordMode,
};
