//! Menu backend abstraction
//!
//! The launcher itself does not draw anything. A menu backend implements
//! [`Menu`] and the parsed configuration is pushed onto it through the
//! setter surface; optional features (placement, password indicator) are
//! discovered at runtime through [`Capabilities`].

/// Vertical placement of the menu on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Top,
    Bottom,
    Center,
}

/// How typed input is echoed while the menu is capturing a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMode {
    /// Show typed characters as-is.
    None,
    /// Show nothing.
    Hide,
    /// Show a fixed indicator per typed character.
    Indicator,
}

impl PasswordMode {
    /// Resolve the raw `--password` argument. Unset and unrecognized
    /// values mean [`PasswordMode::Hide`]; this never fails.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("hide") => PasswordMode::Hide,
            Some("none") => PasswordMode::None,
            Some("indicator") => PasswordMode::Indicator,
            Some(_) => PasswordMode::Hide,
        }
    }
}

/// Item matching behavior of the menu filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    CaseSensitive,
    CaseInsensitive,
}

/// Which output the menu appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Monitor {
    /// Backend decides (usually the focused output).
    #[default]
    Default,
    /// Span every connected output.
    All,
    /// A specific output by index.
    Index(i32),
}

impl Monitor {
    /// Resolve the raw `--monitor` argument. A fully numeric string is an
    /// index, `"all"` spans every output, and anything else (including
    /// `"focused"` and unset) is the default behavior; this never fails.
    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(arg) = arg else {
            return Monitor::Default;
        };
        if let Ok(index) = arg.parse::<i32>() {
            return Monitor::Index(index);
        }
        if arg == "all" {
            return Monitor::All;
        }
        Monitor::Default
    }

    /// The wire index backends expect: -1 for default, -2 for all.
    pub fn index(self) -> i32 {
        match self {
            Monitor::Default => -1,
            Monitor::All => -2,
            Monitor::Index(index) => index,
        }
    }
}

/// The named color slots of the menu, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    TitleBg,
    TitleFg,
    FilterBg,
    FilterFg,
    CursorBg,
    CursorFg,
    ItemBg,
    ItemFg,
    HighlightedBg,
    HighlightedFg,
    FeedbackBg,
    FeedbackFg,
    SelectedBg,
    SelectedFg,
    AlternateBg,
    AlternateFg,
    ScrollbarBg,
    ScrollbarFg,
}

impl ColorRole {
    pub const COUNT: usize = 18;

    pub const ALL: [ColorRole; Self::COUNT] = [
        ColorRole::TitleBg,
        ColorRole::TitleFg,
        ColorRole::FilterBg,
        ColorRole::FilterFg,
        ColorRole::CursorBg,
        ColorRole::CursorFg,
        ColorRole::ItemBg,
        ColorRole::ItemFg,
        ColorRole::HighlightedBg,
        ColorRole::HighlightedFg,
        ColorRole::FeedbackBg,
        ColorRole::FeedbackFg,
        ColorRole::SelectedBg,
        ColorRole::SelectedFg,
        ColorRole::AlternateBg,
        ColorRole::AlternateFg,
        ColorRole::ScrollbarBg,
        ColorRole::ScrollbarFg,
    ];
}

/// Role → hex-string mapping. Colors are stored as the user wrote them
/// (`"#RRGGBB"` style); interpreting them is the backend's business.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    slots: [Option<String>; ColorRole::COUNT],
}

impl ColorMap {
    pub fn get(&self, role: ColorRole) -> Option<&str> {
        self.slots[role as usize].as_deref()
    }

    pub fn set(&mut self, role: ColorRole, color: impl Into<String>) {
        self.slots[role as usize] = Some(color.into());
    }

    /// Set roles in [`ColorRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::ALL
            .iter()
            .filter_map(move |&role| self.get(role).map(|color| (role, color)))
    }

    /// Release every stored color string. Safe to call repeatedly.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.take();
        }
    }

    pub(crate) fn absorb(&mut self, pairs: [(ColorRole, Option<String>); ColorRole::COUNT]) {
        for (role, value) in pairs {
            if let Some(color) = value {
                self.set(role, color);
            }
        }
    }
}

/// Optional features of a menu backend, queried at apply time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// Backend can dock the menu at the bottom edge.
    pub bottom: bool,
    /// Backend supports full [`Align`] placement.
    pub alignment: bool,
    /// Backend can render a password indicator.
    pub password_indicator: bool,
}

/// Setter surface of a menu backend.
///
/// Every setter is a plain capability call; the configuration layer never
/// reads menu state back.
pub trait Menu {
    fn capabilities(&self) -> Capabilities;

    fn set_bottom(&mut self, bottom: bool);
    fn set_align(&mut self, align: Align);
    fn set_panel_overlap(&mut self, overlap: bool);
    fn set_monitor(&mut self, monitor: Monitor);
    fn set_password(&mut self, mode: PasswordMode);
    fn set_line_height(&mut self, height: u32);
    /// `None` keeps the backend's default font.
    fn set_font(&mut self, font: Option<&str>);
    fn set_filter_mode(&mut self, mode: FilterMode);
    fn set_lines(&mut self, lines: u32);
    fn set_wrap(&mut self, wrap: bool);
    fn set_color(&mut self, role: ColorRole, color: &str);
}
