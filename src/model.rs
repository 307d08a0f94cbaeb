//! Uniform in-memory representation of a derived report plan, independent of
//! the host build system. The planner produces these; renderers and the
//! host's task scheduler consume them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::options::ReportOptions;

/// Task group the report tasks are registered under.
pub const REPORT_TASK_GROUP: &str = "Reporting";

/// A single build variant as registered by the host (Android builds), e.g.
/// name "paidDebug", build type "debug", product flavor "paid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantDescriptor {
    pub name: String,
    #[serde(default)]
    pub build_type: Option<String>,
    #[serde(default)]
    pub product_flavor: Option<String>,
}

impl VariantDescriptor {
    pub fn new(
        name: impl Into<String>,
        build_type: Option<&str>,
        product_flavor: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            build_type: build_type.filter(|b| !b.is_empty()).map(String::from),
            product_flavor: product_flavor.filter(|f| !f.is_empty()).map(String::from),
        }
    }

    /// Build type, with the empty string treated as absent.
    #[must_use]
    pub fn build_type(&self) -> Option<&str> {
        self.build_type.as_deref().filter(|b| !b.is_empty())
    }

    /// Product flavor, with the empty string treated as absent.
    #[must_use]
    pub fn flavor(&self) -> Option<&str> {
        self.product_flavor.as_deref().filter(|f| !f.is_empty())
    }

    /// The name reports and tasks are keyed by: the build type alone when no
    /// product flavor is present, the full variant name otherwise.
    #[must_use]
    pub fn source_name(&self) -> &str {
        if self.flavor().is_some() {
            &self.name
        } else {
            self.build_type().unwrap_or(&self.name)
        }
    }
}

/// Report output file locations, present iff the corresponding format is
/// enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOutputs {
    pub xml: Option<String>,
    pub csv: Option<String>,
    pub html: Option<String>,
}

impl ReportOutputs {
    /// Output locations under `build/reports/jacoco/<source_name>/`.
    #[must_use]
    pub fn for_source(source_name: &str, options: &ReportOptions) -> Self {
        let dir = format!("build/reports/jacoco/{source_name}");
        Self {
            xml: options.xml_enabled.then(|| format!("{dir}/jacoco.xml")),
            csv: options.csv_enabled.then(|| format!("{dir}/jacoco.csv")),
            html: options.html_enabled.then(|| format!("{dir}/html")),
        }
    }
}

/// Everything the host needs to materialize one report task: its inputs,
/// outputs, and the test task that must run first. Paths are project-relative
/// and logical — the host filters out directories that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTaskSpec {
    pub task_name: String,
    pub description: String,
    pub source_name: String,
    pub source_directories: BTreeSet<String>,
    pub class_directory_includes: BTreeSet<String>,
    /// Exclusion globs, in the order the user configured them.
    pub class_directory_excludes: Vec<String>,
    pub execution_data_paths: BTreeSet<String>,
    pub depends_on_test_task: String,
    pub feeds_root_report: bool,
    pub outputs: ReportOutputs,
}

/// The aggregated report on the root project, unioned from every spec marked
/// `feeds_root_report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootReportSpec {
    pub task_name: String,
    pub description: String,
    pub source_directories: BTreeSet<String>,
    pub class_directory_includes: BTreeSet<String>,
    pub class_directory_excludes: Vec<String>,
    pub execution_data_paths: BTreeSet<String>,
    /// Report tasks whose output this task aggregates.
    pub depends_on_report_tasks: BTreeSet<String>,
    pub outputs: ReportOutputs,
}

/// The complete plan for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPlan {
    pub tool_version: String,
    pub specs: Vec<ReportTaskSpec>,
}
