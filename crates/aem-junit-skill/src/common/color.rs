use std::io::IsTerminal;
use std::sync::OnceLock;

static STATE: OnceLock<ColorState> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColorState {
    stdout: bool,
    stderr: bool,
}

impl ColorState {
    fn decide(forced_off: bool, stdout_tty: bool, stderr_tty: bool) -> Self {
        Self {
            stdout: !forced_off && stdout_tty,
            stderr: !forced_off && stderr_tty,
        }
    }
}

/// `NO_COLOR` only counts when set to a non-empty value.
fn no_color_requested(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Decides once per process whether ANSI colors are emitted on each stream.
///
/// Colors are off when `--no-color` is passed, when `NO_COLOR` is set, or when
/// the stream is not a terminal (e.g. `aem-junit-skill config > pom.xml`).
pub fn init(no_color_flag: bool) {
    let forced_off =
        no_color_flag || no_color_requested(std::env::var_os("NO_COLOR").as_deref());
    let _ = STATE.set(ColorState::decide(
        forced_off,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    ));
}

fn stdout_enabled() -> bool {
    STATE.get().is_some_and(|s| s.stdout)
}

fn stderr_enabled() -> bool {
    STATE.get().is_some_and(|s| s.stderr)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const DIM: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

/// ANSI styling. `error` and `dim` are for stderr lines, `bold` for stdout.
pub struct Colors;

impl Colors {
    fn paint(enabled: bool, code: &str, text: &str) -> String {
        if enabled {
            format!("{}{}{}", code, text, codes::RESET)
        } else {
            text.to_string()
        }
    }

    pub fn error(text: &str) -> String {
        Self::paint(stderr_enabled(), codes::RED, text)
    }

    pub fn dim(text: &str) -> String {
        Self::paint(stderr_enabled(), codes::DIM, text)
    }

    pub fn bold(text: &str) -> String {
        Self::paint(stdout_enabled(), codes::BOLD, text)
    }
}
