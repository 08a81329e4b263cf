use crate::lockfile_scan::domain::{PackageInstance, ScanResult};
use crate::ports::outbound::ScanFormatter;
use crate::shared::Result;

const RULE_WIDTH: usize = 120;

const STATUS_SAFE: &str = "✅ SAFE";
const STATUS_RISK: &str = "🚨 RISK";
const STATUS_REFERENCE: &str = "⚠️ REF";

/// Which rows the table shows for queries that were not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_safe: bool,
    pub risk_only: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_safe: true,
            risk_only: false,
        }
    }
}

impl DisplayOptions {
    fn shows_safe_rows(&self) -> bool {
        self.show_safe && !self.risk_only
    }
}

/// TableFormatter adapter: fixed-width table plus a security summary
///
/// Instances of one query are grouped by version (first appearance order);
/// the query name and target version appear only on the query's first row.
pub struct TableFormatter {
    options: DisplayOptions,
}

impl TableFormatter {
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    fn row(columns: [&str; 7]) -> String {
        let [package, target, status, found, dev, line, path] = columns;
        format!(
            "{:<30} {:<15} {:<8} {:<15} {:<8} {:<8} {}\n",
            package, target, status, found, dev, line, path
        )
    }

    fn render_safe_row(&self, output: &mut String, result: &ScanResult) {
        if !self.options.shows_safe_rows() {
            return;
        }
        output.push_str(&Self::row([
            result.query().name(),
            result.query().version_spec(),
            STATUS_SAFE,
            "Not Found",
            "-",
            "-",
            "Package not detected in project",
        ]));
    }

    fn render_found_rows(&self, output: &mut String, result: &ScanResult) {
        let mut row_index = 0;
        for (version, instances) in group_by_version(result.instances()) {
            for instance in instances {
                let (package, target) = if row_index == 0 {
                    (result.query().name(), result.query().version_spec())
                } else {
                    ("", "")
                };
                let status = if instance.is_reference {
                    STATUS_REFERENCE
                } else {
                    STATUS_RISK
                };
                let dev = if instance.is_dev { "✓" } else { "-" };

                output.push_str(&Self::row([
                    package,
                    target,
                    status,
                    version,
                    dev,
                    "-",
                    &instance.location_path,
                ]));
                row_index += 1;
            }
        }

        if result.total_instance_count() > 1 {
            let total = format!("({} total)", result.total_instance_count());
            output.push_str(&Self::row(["", "", "", &total, "", "", ""]));
        }
    }

    fn render_summary(&self, output: &mut String, results: &[ScanResult]) {
        let risks = results.iter().filter(|r| r.was_found()).count();
        let safe = results.len() - risks;

        output.push_str(&"=".repeat(RULE_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "SECURITY SUMMARY: 🚨 {} RISKS DETECTED | ✅ {} PACKAGES SAFE\n",
            risks, safe
        ));
        if risks > 0 {
            output.push_str(&format!(
                "⚠️  WARNING: Found {} potentially compromised packages in your project!\n",
                risks
            ));
        } else {
            output.push_str("✅ GOOD: No known compromised packages detected in your project.\n");
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}

impl ScanFormatter for TableFormatter {
    fn format(&self, results: &[ScanResult]) -> Result<String> {
        let mut output = Self::row([
            "Package",
            "Target Ver",
            "Status",
            "Found Ver",
            "Dev",
            "Line#",
            "Path",
        ]);
        output.push_str(&"-".repeat(RULE_WIDTH));
        output.push('\n');

        for result in results {
            if result.was_found() {
                self.render_found_rows(&mut output, result);
            } else {
                self.render_safe_row(&mut output, result);
            }
        }

        self.render_summary(&mut output, results);
        Ok(output)
    }
}

fn group_by_version(instances: &[PackageInstance]) -> Vec<(&str, Vec<&PackageInstance>)> {
    let mut groups: Vec<(&str, Vec<&PackageInstance>)> = Vec::new();
    for instance in instances {
        match groups
            .iter_mut()
            .find(|(version, _)| *version == instance.version)
        {
            Some((_, members)) => members.push(instance),
            None => groups.push((instance.version.as_str(), vec![instance])),
        }
    }
    groups
}
