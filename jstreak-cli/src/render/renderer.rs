use super::theme::Ember;
use jstreak_core::{
    LoadError, MonthCalendar, StreakReport,
    render::{format_calendar, format_report},
};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: Ember::skin(),
            opts,
        }
    }

    /// Markdown through the skin when colored, verbatim otherwise.
    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{}", md.trim_end());
        }
    }

    pub fn print_report(&self, report: &StreakReport) {
        self.print_md(&format_report(report, &self.opts.date_format));
    }

    pub fn print_calendar(&self, calendar: &MonthCalendar) {
        self.print_md(&format_calendar(calendar));
    }

    pub fn print_errors(&self, errors: &[LoadError]) {
        if errors.is_empty() {
            return;
        }
        let mut lines = vec![format!("Could not read {} item(s):", errors.len())];
        for error in errors {
            match error {
                LoadError::FileError { path, error } => {
                    lines.push(format!("* '{}': {error:#}", path.display()));
                }
                LoadError::NonexistentTime { path, time } => {
                    lines.push(format!(
                        "* '{}': {} does not exist in the configured time zone",
                        path.display(),
                        time.format("%Y-%m-%d %H:%M")
                    ));
                }
            }
        }
        for line in lines {
            if self.opts.use_color {
                eprintln!("{}", line.with(Ember::WARN));
            } else {
                eprintln!("{line}");
            }
        }
    }
}
