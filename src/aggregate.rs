//! Accumulation of per-project plans into the root aggregated report.
//!
//! The aggregator is owned by the build-level orchestrator and fed one
//! project plan at a time, so per-project planning stays pure. The union is
//! set-based — commutative and idempotent — which makes the result
//! independent of the order sibling projects are configured in.

use std::collections::BTreeSet;

use crate::model::{ReportOutputs, ReportPlan, RootReportSpec};
use crate::options::ReportOptions;

/// Task name of the aggregated report on the root project.
pub const ROOT_REPORT_TASK: &str = "jacocoAggregatedReport";

#[derive(Debug, Clone, Default)]
pub struct RootAggregator {
    source_directories: BTreeSet<String>,
    class_directory_includes: BTreeSet<String>,
    execution_data_paths: BTreeSet<String>,
    depends_on_report_tasks: BTreeSet<String>,
}

impl RootAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Union every root-feeding spec of `plan` into the accumulator.
    /// Dependency edges are recorded as task paths (`:project:task`), since
    /// sibling projects reuse task names. Absorbing the same plan twice
    /// changes nothing.
    pub fn absorb(&mut self, project: &str, plan: &ReportPlan) {
        for spec in plan.specs.iter().filter(|s| s.feeds_root_report) {
            self.source_directories
                .extend(spec.source_directories.iter().cloned());
            self.class_directory_includes
                .extend(spec.class_directory_includes.iter().cloned());
            self.execution_data_paths
                .extend(spec.execution_data_paths.iter().cloned());
            self.depends_on_report_tasks
                .insert(format!(":{project}:{}", spec.task_name));
        }
    }

    /// Whether any spec has fed the aggregator yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.depends_on_report_tasks.is_empty()
    }

    /// Produce the aggregated report spec, or `None` when nothing fed the
    /// root report — the task is then never created.
    #[must_use]
    pub fn into_spec(self, options: &ReportOptions) -> Option<RootReportSpec> {
        if self.is_empty() {
            return None;
        }
        Some(RootReportSpec {
            task_name: ROOT_REPORT_TASK.to_string(),
            description: "Generate Jacoco coverage reports for default variants.".to_string(),
            source_directories: self.source_directories,
            class_directory_includes: self.class_directory_includes,
            class_directory_excludes: options.global_class_excludes.clone(),
            execution_data_paths: self.execution_data_paths,
            depends_on_report_tasks: self.depends_on_report_tasks,
            outputs: ReportOutputs::for_source("aggregated", options),
        })
    }
}
