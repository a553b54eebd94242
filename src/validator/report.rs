use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Step of the folder check a result belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStage {
    /// Folder layout and file classification
    #[default]
    Structure,
    /// Multiwell exports
    Exports,
    /// Sample identities against the catalog
    Identities,
    /// Spectrum axes within and across plates
    Axes,
}

impl CheckStage {
    /// Every stage in run order.
    pub const ALL: [CheckStage; 4] = [
        CheckStage::Structure,
        CheckStage::Exports,
        CheckStage::Identities,
        CheckStage::Axes,
    ];

    /// Section heading in the printed report.
    pub fn title(&self) -> &'static str {
        match self {
            CheckStage::Structure => "Structure",
            CheckStage::Exports => "Multiwell exports",
            CheckStage::Identities => "Sample identities",
            CheckStage::Axes => "Raman shift axes",
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Usable, but worth a look (missing glass reference, axis drift)
    Warning(String),
    /// The folder cannot be tabulated as is
    Failed(String),
}

impl CheckStatus {
    /// Whether the check passed without warnings
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Whether the check failed
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn marker(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "ok",
            CheckStatus::Warning(_) => "warn",
            CheckStatus::Failed(_) => "FAIL",
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            CheckStatus::Ok => None,
            CheckStatus::Warning(msg) | CheckStatus::Failed(msg) => Some(msg),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Stage that produced the check
    pub stage: CheckStage,
    /// What was checked, e.g. `Plate 3 shifts vs plate 2`
    pub name: String,
    /// Result
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Ok)
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warning(message.into()))
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Failed(message.into()))
    }

    fn with_status(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            stage: CheckStage::default(),
            name: name.into(),
            status,
        }
    }
}

/// Overall result of a folder check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Ready to tabulate
    Ready,
    /// Ready to tabulate, with warnings
    ReadyWithWarnings,
    /// At least one check failed
    NotReady,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Ready => "ready to tabulate",
            Verdict::ReadyWithWarnings => "ready to tabulate, with warnings",
            Verdict::NotReady => "NOT ready to tabulate",
        })
    }
}

/// Check report for a folder of plate spectra, grouped by stage
#[derive(Debug)]
pub struct ValidationReport {
    /// Results in the order they were recorded
    pub checks: Vec<ValidationCheck>,
    /// Folder that was checked
    pub folder: String,
    stage: CheckStage,
}

impl ValidationReport {
    /// Create an empty report for a folder
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            folder: folder.into(),
            stage: CheckStage::default(),
        }
    }

    /// Attribute subsequent checks to `stage`.
    pub fn enter(&mut self, stage: CheckStage) {
        self.stage = stage;
    }

    /// Record a result under the current stage
    pub fn add_check(&mut self, mut check: ValidationCheck) {
        check.stage = self.stage;
        self.checks.push(check);
    }

    /// Results of one stage
    pub fn stage_checks(&self, stage: CheckStage) -> impl Iterator<Item = &ValidationCheck> {
        self.checks.iter().filter(move |c| c.stage == stage)
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Whether any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(c.status, CheckStatus::Warning(_)))
    }

    /// Overall result
    pub fn verdict(&self) -> Verdict {
        if self.has_failures() {
            Verdict::NotReady
        } else if self.has_warnings() {
            Verdict::ReadyWithWarnings
        } else {
            Verdict::Ready
        }
    }

    /// Render the report with terminal colors when the feature is enabled
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            self.render(|status, text| match status {
                CheckStatus::Ok => style(text).green().to_string(),
                CheckStatus::Warning(_) => style(text).yellow().to_string(),
                CheckStatus::Failed(_) => style(text).red().bold().to_string(),
            })
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }

    /// Lay the report out section by section; `paint` styles status-dependent text.
    fn render<F>(&self, paint: F) -> String
    where
        F: Fn(&CheckStatus, &str) -> String,
    {
        let mut out = format!("Checking {}\n", self.folder);

        for stage in CheckStage::ALL {
            let mut checks = self.stage_checks(stage).peekable();
            if checks.peek().is_none() {
                continue;
            }
            out.push_str(&format!("\n{}\n", stage.title()));
            for check in checks {
                let marker = paint(&check.status, &format!("[{:>4}]", check.status.marker()));
                match check.status.detail() {
                    Some(detail) => out.push_str(&format!("  {} {}: {}\n", marker, check.name, detail)),
                    None => out.push_str(&format!("  {} {}\n", marker, check.name)),
                }
            }
        }

        let verdict = self.verdict();
        let status = match verdict {
            Verdict::Ready => CheckStatus::Ok,
            Verdict::ReadyWithWarnings => CheckStatus::Warning(String::new()),
            Verdict::NotReady => CheckStatus::Failed(String::new()),
        };
        out.push_str(&format!(
            "\n{} checks: {}\n",
            self.checks.len(),
            paint(&status, &verdict.to_string())
        ));
        out
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, text| text.to_string()))
    }
}
