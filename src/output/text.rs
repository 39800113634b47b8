//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-group status lines (checking, up to date, declined)
//! - Outdated package listing with delta labels
//! - Update confirmation and a closing summary

use crate::domain::{DeltaKind, DependencyGroup, EvaluatedDependency, RunReport};
use colored::Colorize;
use std::io::Write;

/// Minimum width of the package name column
const MIN_NAME_WIDTH: usize = 20;

/// Get the display label for a delta with color
fn colored_label(kind: DeltaKind) -> String {
    match kind {
        DeltaKind::Major => kind.label().red().bold().to_string(),
        DeltaKind::Minor => kind.label().yellow().to_string(),
        DeltaKind::Fix => kind.label().green().to_string(),
        DeltaKind::None => kind.label().dimmed().to_string(),
    }
}

/// Text formatter for human-readable output
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(dry_run: bool, color: bool) -> Self {
        Self { dry_run, color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    fn names(dependencies: &[EvaluatedDependency]) -> String {
        dependencies
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Announce that a group is being checked
    pub fn format_checking(
        &self,
        group: DependencyGroup,
        count: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let noun = if count == 1 { "package" } else { "packages" };
        if self.color {
            writeln!(
                writer,
                "Checking {} ({} {})...",
                group.to_string().bold(),
                count,
                noun
            )
        } else {
            writeln!(writer, "Checking {} ({} {})...", group, count, noun)
        }
    }

    /// Report a group with nothing to update
    pub fn format_up_to_date(
        &self,
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{} {} are up to date", "✔".green(), group)
        } else {
            writeln!(writer, "{} are up to date", group)
        }
    }

    /// Format a single outdated line
    fn format_outdated_line(
        &self,
        dependency: &EvaluatedDependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            let name_display = format!("{:width$}", dependency.name, width = max_name_len);
            writeln!(
                writer,
                "  {} {} {} {} [{}]",
                name_display,
                dependency.installed_version.dimmed(),
                "→".dimmed(),
                dependency.latest_version.bright_white().bold(),
                colored_label(dependency.delta.kind)
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]",
                dependency.name,
                dependency.installed_version,
                dependency.latest_version,
                dependency.delta.label,
                width = max_name_len
            )
        }
    }

    /// List every outdated package of a group
    pub fn format_outdated(
        &self,
        group: DependencyGroup,
        outdated: &[EvaluatedDependency],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(
                writer,
                "{} {} {}:",
                outdated.len().to_string().yellow(),
                "outdated in".bold(),
                group.to_string().bold()
            )?;
        } else {
            writeln!(writer, "{} outdated in {}:", outdated.len(), group)?;
        }

        let max_name_len = outdated
            .iter()
            .map(|d| d.name.len())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH);

        for dependency in outdated {
            self.format_outdated_line(dependency, max_name_len, writer)?;
        }
        Ok(())
    }

    /// Report that the user declined the update
    pub fn format_declined(
        &self,
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let line = format!("Skipped updating {}; no changes made.", group);
        if self.color {
            writeln!(writer, "{}", line.dimmed())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Report that every outdated package was filtered out
    pub fn format_nothing_selected(
        &self,
        group: DependencyGroup,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let line = format!("Nothing left to update in {} after excluding major updates.", group);
        if self.color {
            writeln!(writer, "{}", line.dimmed())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Report the install command a dry run would have issued
    pub fn format_dry_run(
        &self,
        command: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "{}would run: {}", self.dry_run_prefix(), command)
    }

    /// Report installed packages
    pub fn format_updated(
        &self,
        group: DependencyGroup,
        updated: &[EvaluatedDependency],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let names = Self::names(updated);
        if self.color {
            writeln!(writer, "{} Updated {}: {}", "✔".green(), group, names.bold())
        } else {
            writeln!(writer, "Updated {}: {}", group, names)
        }
    }

    /// Closing summary across both groups
    pub fn format_summary(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let selected: Vec<&EvaluatedDependency> = report
            .groups
            .iter()
            .filter_map(|g| g.result.as_ref().ok())
            .flat_map(|o| o.selected())
            .collect();

        if selected.is_empty() {
            return Ok(());
        }

        let count = |kind: DeltaKind| selected.iter().filter(|d| d.delta.kind == kind).count();
        let mut parts = Vec::new();
        for kind in [DeltaKind::Major, DeltaKind::Minor, DeltaKind::Fix] {
            let n = count(kind);
            if n > 0 {
                if self.color {
                    parts.push(format!("{} {}", n, colored_label(kind)));
                } else {
                    parts.push(format!("{} {}", n, kind.label()));
                }
            }
        }

        let verb = if self.dry_run { "to update" } else { "updated" };
        writeln!(
            writer,
            "{}{} package(s) {} ({})",
            self.dry_run_prefix(),
            selected.len(),
            verb,
            parts.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyRecord, GroupOutcome, GroupReport, VersionDelta};
    use crate::error::LookupError;

    fn dep(name: &str, installed: &str, latest: &str, kind: DeltaKind) -> EvaluatedDependency {
        EvaluatedDependency::new(
            DependencyRecord::new(name, installed),
            latest,
            VersionDelta::new(kind),
        )
    }

    fn render(f: impl FnOnce(&TextFormatter, &mut dyn Write) -> std::io::Result<()>) -> String {
        let formatter = TextFormatter::new(false, false);
        let mut buf = Vec::new();
        f(&formatter, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_checking() {
        let out = render(|f, w| f.format_checking(DependencyGroup::Dev, 1, w));
        assert_eq!(out, "Checking devDependencies (1 package)...\n");
        let out = render(|f, w| f.format_checking(DependencyGroup::Runtime, 3, w));
        assert_eq!(out, "Checking dependencies (3 packages)...\n");
    }

    #[test]
    fn test_format_up_to_date() {
        let out = render(|f, w| f.format_up_to_date(DependencyGroup::Runtime, w));
        assert_eq!(out, "dependencies are up to date\n");
    }

    #[test]
    fn test_format_outdated_lines() {
        let deps = vec![
            dep("chalk", "4.1.2", "5.3.0", DeltaKind::Major),
            dep("left-pad", "1.0.0", "1.0.1", DeltaKind::Fix),
        ];
        let out = render(|f, w| f.format_outdated(DependencyGroup::Runtime, &deps, w));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "2 outdated in dependencies:");
        assert_eq!(
            lines[1],
            format!("  {:20} 4.1.2 -> 5.3.0 [major]", "chalk")
        );
        assert_eq!(
            lines[2],
            format!("  {:20} 1.0.0 -> 1.0.1 [fix]", "left-pad")
        );
    }

    #[test]
    fn test_format_outdated_long_names_widen_column() {
        let long = "a-really-long-package-name-here";
        let deps = vec![dep(long, "1.0.0", "1.1.0", DeltaKind::Minor)];
        let out = render(|f, w| f.format_outdated(DependencyGroup::Dev, &deps, w));
        assert!(out.contains(&format!("  {} 1.0.0 -> 1.1.0 [minor]", long)));
    }

    #[test]
    fn test_format_declined_and_nothing_selected() {
        let out = render(|f, w| f.format_declined(DependencyGroup::Dev, w));
        assert!(out.contains("Skipped updating devDependencies"));
        let out = render(|f, w| f.format_nothing_selected(DependencyGroup::Runtime, w));
        assert!(out.contains("Nothing left to update in dependencies"));
    }

    #[test]
    fn test_format_updated() {
        let deps = vec![
            dep("a", "1.0.0", "1.1.0", DeltaKind::Minor),
            dep("b", "1.0.0", "1.0.1", DeltaKind::Fix),
        ];
        let out = render(|f, w| f.format_updated(DependencyGroup::Runtime, &deps, w));
        assert_eq!(out, "Updated dependencies: a, b\n");
    }

    #[test]
    fn test_format_dry_run_prefix() {
        let formatter = TextFormatter::new(true, false);
        let mut buf = Vec::new();
        formatter
            .format_dry_run("npm install --save-exact a@latest", &mut buf)
            .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "(dry-run) would run: npm install --save-exact a@latest\n"
        );
    }

    #[test]
    fn test_format_summary_counts_kinds() {
        let mut report = RunReport::new();
        report.add_group(GroupReport::new(
            DependencyGroup::Runtime,
            Ok(GroupOutcome::Updated(vec![
                dep("a", "1.0.0", "2.0.0", DeltaKind::Major),
                dep("b", "1.0.0", "1.1.0", DeltaKind::Minor),
            ])),
        ));
        report.add_group(GroupReport::new(
            DependencyGroup::Dev,
            Err(LookupError::package_lookup_failed("c", "E404").into()),
        ));
        let out = render(|f, w| f.format_summary(&report, w));
        assert_eq!(out, "2 package(s) updated (1 major, 1 minor)\n");
    }

    #[test]
    fn test_format_summary_empty_prints_nothing() {
        let mut report = RunReport::new();
        report.add_group(GroupReport::new(
            DependencyGroup::Runtime,
            Ok(GroupOutcome::Declined),
        ));
        assert_eq!(render(|f, w| f.format_summary(&report, w)), "");
    }
}
