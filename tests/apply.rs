//! End-to-end: parse both option sources, apply onto a mock menu.

use lmenu::{
    init_config_from, Align, Capabilities, ColorRole, FilterMode, Menu, Monitor, PasswordMode,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Bottom(bool),
    AlignTo(Align),
    PanelOverlap(bool),
    MonitorTo(Monitor),
    Password(PasswordMode),
    LineHeight(u32),
    Font(Option<String>),
    Filter(FilterMode),
    Lines(u32),
    Wrap(bool),
    Color(ColorRole, String),
}

/// Records every setter invocation in order.
struct RecordingMenu {
    caps: Capabilities,
    calls: Vec<Call>,
}

impl RecordingMenu {
    fn new(caps: Capabilities) -> Self {
        RecordingMenu {
            caps,
            calls: Vec::new(),
        }
    }

    fn full() -> Self {
        Self::new(Capabilities {
            bottom: true,
            alignment: true,
            password_indicator: true,
        })
    }

    fn bare() -> Self {
        Self::new(Capabilities::default())
    }
}

impl Menu for RecordingMenu {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn set_bottom(&mut self, bottom: bool) {
        self.calls.push(Call::Bottom(bottom));
    }

    fn set_align(&mut self, align: Align) {
        self.calls.push(Call::AlignTo(align));
    }

    fn set_panel_overlap(&mut self, overlap: bool) {
        self.calls.push(Call::PanelOverlap(overlap));
    }

    fn set_monitor(&mut self, monitor: Monitor) {
        self.calls.push(Call::MonitorTo(monitor));
    }

    fn set_password(&mut self, mode: PasswordMode) {
        self.calls.push(Call::Password(mode));
    }

    fn set_line_height(&mut self, height: u32) {
        self.calls.push(Call::LineHeight(height));
    }

    fn set_font(&mut self, font: Option<&str>) {
        self.calls.push(Call::Font(font.map(str::to_owned)));
    }

    fn set_filter_mode(&mut self, mode: FilterMode) {
        self.calls.push(Call::Filter(mode));
    }

    fn set_lines(&mut self, lines: u32) {
        self.calls.push(Call::Lines(lines));
    }

    fn set_wrap(&mut self, wrap: bool) {
        self.calls.push(Call::Wrap(wrap));
    }

    fn set_color(&mut self, role: ColorRole, color: &str) {
        self.calls.push(Call::Color(role, color.to_owned()));
    }
}

#[test]
fn defaults_reach_the_menu_in_order() {
    let settings = init_config_from(&[], None);
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    assert_eq!(
        menu.calls,
        vec![
            Call::Bottom(false),
            Call::AlignTo(Align::Top),
            Call::PanelOverlap(true),
            Call::MonitorTo(Monitor::Default),
            Call::Password(PasswordMode::Hide),
            Call::LineHeight(0),
            Call::Font(None),
            Call::Lines(3),
            Call::Wrap(false),
        ]
    );
}

#[test]
fn parsed_options_reach_the_menu_in_order() {
    let settings = init_config_from(
        &[
            "--bottom",
            "--no-overlap",
            "-m",
            "1",
            "-x",
            "none",
            "-H",
            "20",
            "--fn",
            "monospace 10",
            "-i",
            "-l",
            "7",
            "-w",
            "--tb",
            "#aa0000",
            "--scf",
            "#00bb00",
        ],
        None,
    );
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    assert_eq!(
        menu.calls,
        vec![
            Call::Bottom(true),
            Call::AlignTo(Align::Bottom),
            Call::PanelOverlap(false),
            Call::MonitorTo(Monitor::Index(1)),
            Call::Password(PasswordMode::None),
            Call::LineHeight(20),
            Call::Font(Some("monospace 10".to_owned())),
            Call::Filter(FilterMode::CaseInsensitive),
            Call::Lines(7),
            Call::Wrap(true),
            Call::Color(ColorRole::TitleBg, "#aa0000".to_owned()),
            Call::Color(ColorRole::ScrollbarFg, "#00bb00".to_owned()),
        ]
    );
}

#[test]
fn center_wins_over_bottom_for_alignment() {
    let settings = init_config_from(&["-b", "-c"], None);
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    assert!(menu.calls.contains(&Call::Bottom(true)));
    assert!(menu.calls.contains(&Call::AlignTo(Align::Center)));
}

#[test]
fn capabilities_gate_placement_and_password() {
    let settings = init_config_from(&["-b", "-c", "-x", "indicator"], None);
    let mut menu = RecordingMenu::bare();
    settings.apply_to(&mut menu);

    assert!(!menu
        .calls
        .iter()
        .any(|call| matches!(call, Call::Bottom(_) | Call::AlignTo(_))));
    // Without the indicator capability input is still masked.
    assert!(menu.calls.contains(&Call::Password(PasswordMode::Hide)));
}

#[test]
fn environment_options_apply_and_command_line_wins() {
    let settings = init_config_from(&["--list", "7"], Some("--wrap --ignorecase --list 5"));
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    assert!(menu.calls.contains(&Call::Lines(7)));
    assert!(menu.calls.contains(&Call::Wrap(true)));
    assert!(menu
        .calls
        .contains(&Call::Filter(FilterMode::CaseInsensitive)));
}

#[test]
fn monitor_all_reaches_the_menu_as_the_all_selection() {
    let settings = init_config_from(&["-m", "all"], None);
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    assert!(menu.calls.contains(&Call::MonitorTo(Monitor::All)));
    assert_eq!(Monitor::All.index(), -2);
}

#[test]
fn unset_colors_never_touch_the_menu() {
    let settings = init_config_from(&["--tf", "#112233"], None);
    let mut menu = RecordingMenu::full();
    settings.apply_to(&mut menu);

    let colors: Vec<&Call> = menu
        .calls
        .iter()
        .filter(|call| matches!(call, Call::Color(_, _)))
        .collect();
    assert_eq!(
        colors,
        vec![&Call::Color(ColorRole::TitleFg, "#112233".to_owned())]
    );
}

#[test]
fn display_option_is_exported_globally() {
    let settings = init_config_from(&["-D", ":7"], None);
    settings.apply_global();
    assert_eq!(std::env::var("DISPLAY").as_deref(), Ok(":7"));

    // Without the option the export is a no-op.
    std::env::remove_var("DISPLAY");
    init_config_from(&[], None).apply_global();
    assert!(std::env::var("DISPLAY").is_err());
}
