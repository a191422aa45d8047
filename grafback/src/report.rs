//! Per-run outcome counters.

use std::fmt;

/// Counters accumulated over one backup run: how many dashboards were
/// attempted, and how many of those did not make it to disk. Folder
/// containers are not counted. A fresh report is created per invocation and
/// returned to the caller; a non-zero `failed` is reported, not raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Dashboards attempted
    pub total: u32,
    /// Subset of `total` that failed fetch, serialize, or write
    pub failed: u32,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done! Download Statistics:\n\tTotal: {}\n\tFailed: {}",
            self.total, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RunReport;

    #[test]
    fn summary_format() {
        let report = RunReport {
            total: 12,
            failed: 3,
        };
        let text = report.to_string();
        assert!(text.contains("Total: 12"));
        assert!(text.contains("Failed: 3"));
    }
}
