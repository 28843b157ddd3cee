//! Command-line option table and parsing

use argh::FromArgs;

use crate::menu::ColorRole;

pub(crate) const PROGRAM: &str = env!("CARGO_PKG_NAME");

/// Dynamic menu launcher.
///
/// Options may also be given through the LMENU_OPTS environment
/// variable; command-line options override it.
#[derive(argh::FromArgs, Debug, Clone, Default)]
pub struct RawOpts {
    /// print debug information
    #[argh(switch)]
    pub debug: bool,

    /// dock the menu at the bottom of the screen
    #[argh(switch, short = 'b')]
    pub bottom: bool,

    /// center the menu on the screen
    #[argh(switch, short = 'c')]
    pub center: bool,

    /// lay the menu out beside screen panels instead of over them
    #[argh(switch, short = 'n')]
    pub no_overlap: bool,

    /// index of the monitor to use, or "focused" or "all"
    #[argh(option, short = 'm', arg_name = "monitor")]
    pub monitor: Option<String>,

    /// handling of typed characters: "none", "hide" or "indicator"
    #[argh(option, short = 'x', arg_name = "mode")]
    pub password: Option<String>,

    /// height for each menu line
    #[argh(option, short = 'H', arg_name = "px")]
    pub line_height: Option<u32>,

    /// font to draw the menu with
    #[argh(option, long = "fn", arg_name = "font")]
    pub font: Option<String>,

    /// set the X display
    #[argh(option, short = 'D', arg_name = "name")]
    pub display: Option<String>,

    /// match items case insensitively
    #[argh(switch, short = 'i')]
    pub ignorecase: bool,

    /// list items vertically with the given number of lines
    #[argh(option, short = 'l', arg_name = "lines")]
    pub list: Option<u32>,

    /// wrap cursor selection at the ends of the list
    #[argh(switch, short = 'w')]
    pub wrap: bool,

    /// title background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub tb: Option<String>,

    /// title foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub tf: Option<String>,

    /// filter background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub fb: Option<String>,

    /// filter foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub ff: Option<String>,

    /// cursor background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub cb: Option<String>,

    /// cursor foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub cf: Option<String>,

    /// normal background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub nb: Option<String>,

    /// normal foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub nf: Option<String>,

    /// highlighted background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub hb: Option<String>,

    /// highlighted foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub hf: Option<String>,

    /// feedback background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub fbb: Option<String>,

    /// feedback foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub fbf: Option<String>,

    /// selected background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub sb: Option<String>,

    /// selected foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub sf: Option<String>,

    /// alternating background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub ab: Option<String>,

    /// alternating foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub af: Option<String>,

    /// scrollbar background color
    #[argh(option, arg_name = "#RRGGBB")]
    pub scb: Option<String>,

    /// scrollbar foreground color
    #[argh(option, arg_name = "#RRGGBB")]
    pub scf: Option<String>,
}

impl RawOpts {
    /// Move the color values out, paired with their roles, in
    /// [`ColorRole::ALL`] order.
    pub(crate) fn color_pairs(&mut self) -> [(ColorRole, Option<String>); ColorRole::COUNT] {
        [
            (ColorRole::TitleBg, self.tb.take()),
            (ColorRole::TitleFg, self.tf.take()),
            (ColorRole::FilterBg, self.fb.take()),
            (ColorRole::FilterFg, self.ff.take()),
            (ColorRole::CursorBg, self.cb.take()),
            (ColorRole::CursorFg, self.cf.take()),
            (ColorRole::ItemBg, self.nb.take()),
            (ColorRole::ItemFg, self.nf.take()),
            (ColorRole::HighlightedBg, self.hb.take()),
            (ColorRole::HighlightedFg, self.hf.take()),
            (ColorRole::FeedbackBg, self.fbb.take()),
            (ColorRole::FeedbackFg, self.fbf.take()),
            (ColorRole::SelectedBg, self.sb.take()),
            (ColorRole::SelectedFg, self.sf.take()),
            (ColorRole::AlternateBg, self.ab.take()),
            (ColorRole::AlternateFg, self.af.take()),
            (ColorRole::ScrollbarBg, self.scb.take()),
            (ColorRole::ScrollbarFg, self.scf.take()),
        ]
    }
}

/// Option-parse failures. All of them are reported and swallowed;
/// startup continues with whatever did parse.
#[derive(Debug, thiserror::Error)]
pub enum ParseFailure {
    /// The option string could not be split into tokens.
    #[error("{0}")]
    Tokenize(#[from] shell_words::ParseError),
    /// The token list did not match the option table.
    #[error("{0}")]
    BadArgs(String),
}

/// One diagnostic line on stderr, advisory only.
pub(crate) fn report_parse_failure(failure: &ParseFailure) {
    eprintln!("{}: {}", PROGRAM, failure);
}

/// Parse a token list against the option table.
///
/// Used for both the real command line (without the program name) and
/// the tokenized environment string. `--help` prints the generated help
/// and exits. A bad token is reported and the pass yields defaults.
pub(crate) fn parse_tokens(tokens: &[&str]) -> RawOpts {
    match RawOpts::from_args(&[PROGRAM], tokens) {
        Ok(opts) => opts,
        Err(early) => match early.status {
            Ok(()) => {
                println!("{}", early.output);
                std::process::exit(0);
            }
            Err(()) => {
                let detail = early
                    .output
                    .lines()
                    .next()
                    .unwrap_or("invalid arguments")
                    .to_string();
                report_parse_failure(&ParseFailure::BadArgs(detail));
                RawOpts::default()
            }
        },
    }
}
