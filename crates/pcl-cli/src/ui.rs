//! Terminal capabilities, resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Colour status cells in tables.
    pub table_color: bool,
    /// Show spinners on stderr.
    pub progress: bool,
    pub term_width: Option<usize>,
    pub quiet: bool,
}

/// What the process can see of its environment.
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        Self {
            table_color: terminal.stdout_tty
                && !terminal.no_color
                && !flags.quiet
                && flags.format == OutputFormat::Table,
            progress: terminal.stderr_tty && !flags.quiet,
            term_width: terminal
                .columns
                .as_deref()
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width >= 40),
            quiet: flags.quiet,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let terminal = Terminal {
        stdout_tty: std::io::stdout().is_terminal(),
        stderr_tty: std::io::stderr().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some(),
        columns: std::env::var("COLUMNS").ok(),
    };
    let _ = UI_PREFS.set(UiPrefs::detect(flags, &terminal));
}

/// Plain output until [`init`] runs (tests, early errors).
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Status line on stderr, suppressed by `--quiet`.
pub fn note(message: &str) {
    if !prefs().quiet {
        eprintln!("{message}");
    }
}
