//! The build model — a serialized stand-in for the host's project graph —
//! and the orchestration that turns it into a complete build plan.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::RootAggregator;
use crate::capabilities::BuildCapabilities;
use crate::error::{PlanError, Result};
use crate::model::{ReportTaskSpec, RootReportSpec, VariantDescriptor};
use crate::options::{ReportOptions, RootReportSelector};
use crate::planner::plan_reports;

/// One project's coverage-relevant facts, as the host reports them after
/// plugin application and variant registration have finished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectModel {
    pub name: String,
    /// Applied plugin identifiers, e.g. "com.android.library".
    #[serde(default)]
    pub plugins: Vec<String>,
    /// Kotlin target platforms ("jvm", "js", ...), used to decide whether an
    /// applied multiplatform plugin has a JVM target.
    #[serde(default)]
    pub kotlin_targets: Vec<String>,
    /// Registered Android build variants; empty for JVM-only projects.
    #[serde(default)]
    pub variants: Vec<VariantDescriptor>,
}

impl ProjectModel {
    #[must_use]
    pub fn capabilities(&self) -> BuildCapabilities {
        BuildCapabilities::from_plugins(
            self.plugins.iter().map(String::as_str),
            &self.kotlin_targets,
        )
    }
}

/// The whole build: root-project properties plus every subproject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildModel {
    /// Gradle-style properties, e.g. "jacocoConfig.version".
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    /// Subproject names to skip entirely.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Explicit exclusion globs, overriding the property-derived ones.
    #[serde(default)]
    pub excludes: Option<Vec<String>>,
    /// Root report selector, overriding the default debug-only policy.
    #[serde(default)]
    pub root_report: Option<RootReportSelector>,
    #[serde(default)]
    pub projects: Vec<ProjectModel>,
}

impl BuildModel {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Resolve the effective report options: property overrides first, then
    /// the model's explicit settings on top.
    #[must_use]
    pub fn resolve_options(&self) -> ReportOptions {
        let mut options = ReportOptions::from_properties(&self.properties);
        if let Some(excludes) = &self.excludes {
            options.global_class_excludes = excludes.clone();
        }
        if let Some(selector) = &self.root_report {
            options.root_report = selector.clone();
        }
        options
    }
}

/// Report tasks for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub project: String,
    pub specs: Vec<ReportTaskSpec>,
}

/// The complete derived build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub tool_version: String,
    pub projects: Vec<ProjectPlan>,
    pub root: Option<RootReportSpec>,
}

/// Plan every project in the build and aggregate the root report.
///
/// Root aggregation happens serially here; the per-project planning calls
/// themselves touch no shared state. A project that fails validation aborts
/// the whole build plan, surfacing the error at configuration time.
pub fn plan_build(model: &BuildModel) -> Result<BuildPlan> {
    let options = model.resolve_options();
    let mut aggregator = RootAggregator::new();
    let mut projects = Vec::with_capacity(model.projects.len());

    for project in &model.projects {
        if model.ignore.iter().any(|ignored| ignored == &project.name) {
            debug!(project = project.name.as_str(), "skipping ignored project");
            continue;
        }
        let capabilities = project.capabilities();
        let plan =
            plan_reports(&capabilities, &project.variants, &options).map_err(|e| match e {
                PlanError::InvalidConfiguration(message) => PlanError::InvalidConfiguration(
                    format!("project '{}': {}", project.name, message),
                ),
                other => other,
            })?;
        aggregator.absorb(&project.name, &plan);
        projects.push(ProjectPlan {
            project: project.name.clone(),
            specs: plan.specs,
        });
    }

    Ok(BuildPlan {
        tool_version: options.tool_version.clone(),
        projects,
        root: aggregator.into_spec(&options),
    })
}
