//! Settings record and application onto a menu backend

use log::debug;

use super::cli::RawOpts;
use super::env::DISPLAY_VAR;
use crate::menu::{Align, ColorMap, FilterMode, Menu, Monitor, PasswordMode};

/// Lines shown when `--list` is not given.
pub const DEFAULT_LINES: u32 = 3;

/// Everything the option surface can configure, with command-line
/// values already layered over environment ones.
///
/// Read-only once built; the apply methods push it onto a backend.
#[derive(Debug, Clone)]
pub struct Settings {
    pub debug: bool,
    pub bottom: bool,
    pub center: bool,
    pub no_overlap: bool,
    pub monitor: Option<String>,
    pub password: Option<String>,
    pub line_height: u32,
    pub font: Option<String>,
    pub display: Option<String>,
    pub ignore_case: bool,
    pub lines: u32,
    pub wrap: bool,
    pub colors: ColorMap,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug: false,
            bottom: false,
            center: false,
            no_overlap: false,
            monitor: None,
            password: None,
            line_height: 0,
            font: None,
            display: None,
            ignore_case: false,
            lines: DEFAULT_LINES,
            wrap: false,
            colors: ColorMap::default(),
        }
    }
}

impl Settings {
    /// Combine the two parse passes. Value options take the
    /// command-line one when both are set; flags latch from either
    /// source. Colors are absorbed environment first, so a
    /// command-line color overwrites the same role.
    pub fn new(mut cli: RawOpts, mut env: RawOpts) -> Self {
        let mut colors = ColorMap::default();
        colors.absorb(env.color_pairs());
        colors.absorb(cli.color_pairs());

        Settings {
            debug: env.debug || cli.debug,
            bottom: env.bottom || cli.bottom,
            center: env.center || cli.center,
            no_overlap: env.no_overlap || cli.no_overlap,
            monitor: cli.monitor.or(env.monitor),
            password: cli.password.or(env.password),
            line_height: cli.line_height.or(env.line_height).unwrap_or(0),
            font: cli.font.or(env.font),
            display: cli.display.or(env.display),
            ignore_case: env.ignorecase || cli.ignorecase,
            lines: cli.list.or(env.list).unwrap_or(DEFAULT_LINES),
            wrap: env.wrap || cli.wrap,
            colors,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Export the `--display` value for downstream display selection.
    /// No-op when the option was not given.
    pub fn apply_global(&self) {
        if let Some(display) = &self.display {
            debug!("exporting {}={}", DISPLAY_VAR, display);
            std::env::set_var(DISPLAY_VAR, display);
        }
    }

    /// Push every setting onto the menu, placement first, colors last.
    ///
    /// Placement and password-indicator setters are gated on the
    /// backend's [`Capabilities`](crate::menu::Capabilities); without
    /// the indicator capability the password mode degrades to plain
    /// hide. The filter mode is only touched when case-insensitive
    /// matching was requested, leaving the backend default otherwise.
    pub fn apply_to<M: Menu + ?Sized>(&self, menu: &mut M) {
        let caps = menu.capabilities();

        if caps.bottom {
            menu.set_bottom(self.bottom);
        }
        if caps.alignment {
            menu.set_align(self.align());
        }
        menu.set_panel_overlap(!self.no_overlap);
        menu.set_monitor(Monitor::from_arg(self.monitor.as_deref()));
        if caps.password_indicator {
            menu.set_password(PasswordMode::from_arg(self.password.as_deref()));
        } else {
            menu.set_password(PasswordMode::Hide);
        }
        menu.set_line_height(self.line_height);
        menu.set_font(self.font.as_deref());
        if self.ignore_case {
            menu.set_filter_mode(FilterMode::CaseInsensitive);
        }
        menu.set_lines(self.lines);
        menu.set_wrap(self.wrap);
        for (role, color) in self.colors.iter() {
            menu.set_color(role, color);
        }
    }

    fn align(&self) -> Align {
        if self.center {
            Align::Center
        } else if self.bottom {
            Align::Bottom
        } else {
            Align::Top
        }
    }

    /// Explicit teardown: release the owned font and color strings.
    /// Flags and integers keep their values. Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.font.take();
        self.colors.clear();
    }
}
