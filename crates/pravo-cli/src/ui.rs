use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stdout().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && table && !flags.quiet && std::env::var_os("NO_COLOR").is_none()
        }
    };

    let progress = is_tty && !flags.quiet && flags.format != OutputFormat::Json;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            quiet,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn json_never_shows_progress() {
        let prefs = resolve(&flags(OutputFormat::Json, ColorMode::Auto, false), true);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn quiet_or_piped_hides_progress() {
        assert!(!resolve(&flags(OutputFormat::Table, ColorMode::Auto, true), true).progress);
        assert!(!resolve(&flags(OutputFormat::Table, ColorMode::Auto, false), false).progress);
    }

    #[test]
    fn color_always_applies_to_tables_only() {
        assert!(resolve(&flags(OutputFormat::Table, ColorMode::Always, false), false).table_color);
        assert!(!resolve(&flags(OutputFormat::Raw, ColorMode::Always, false), false).table_color);
        assert!(!resolve(&flags(OutputFormat::Table, ColorMode::Never, false), true).table_color);
    }
}
