use colored::Colorize;

use crate::driver::{ModuleOutcome, ModuleStatus};

/// Renders progress lines and placeholder reports.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `  sokol_gfx.h => Gfx`, naming the IR file when there is no header.
    pub fn progress_line(&self, outcome: &ModuleOutcome) -> String {
        let source = outcome.job.header.as_ref().unwrap_or(&outcome.job.ir);
        let source = source.display().to_string();
        let status = match outcome.status {
            ModuleStatus::Written => "",
            ModuleStatus::Unchanged => " (unchanged)",
            ModuleStatus::Stale => " (out of date)",
            ModuleStatus::Printed => "",
        };

        let status = if self.color && outcome.status == ModuleStatus::Stale {
            status.red().bold().to_string()
        } else {
            status.to_string()
        };
        format!("  {source} => {}{status}", outcome.module.name)
    }

    /// One warning line per placeholder, empty when there are none.
    pub fn render_placeholders(&self, outcome: &ModuleOutcome) -> String {
        let mut out = String::new();
        for placeholder in &outcome.module.placeholders {
            out.push_str(&format!(
                "{} {}: no C# mapping for {}.{} ({})\n",
                self.label("warning"),
                outcome.module.file_name(),
                placeholder.owner,
                placeholder.member,
                placeholder.c_type
            ));
        }
        out
    }

    pub fn render_summary(&self, modules: usize, placeholders: usize, stale: usize) -> String {
        let mut summary = format!("{modules} module(s), {placeholders} placeholder(s)");
        if stale > 0 {
            let stale = format!("{stale} out of date");
            let stale = if self.color {
                stale.red().bold().to_string()
            } else {
                stale
            };
            summary.push_str(", ");
            summary.push_str(&stale);
        }
        summary
    }

    fn label(&self, label: &str) -> String {
        if !self.color {
            return format!("{label}:");
        }
        format!("{}", format!("{label}:").yellow().bold())
    }
}
