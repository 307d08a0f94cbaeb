//! Output formatting for derived build plans.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::aggregate::ROOT_REPORT_TASK;
use crate::model::{ReportOutputs, ReportTaskSpec, REPORT_TASK_GROUP};
use crate::project::BuildPlan;

/// Trait for formatting build plans.
pub trait PlanFormatter {
    /// Format the plan to a string.
    fn format(&self, plan: &BuildPlan) -> String;
}

/// Plain text formatter.
pub struct TextFormatter;

impl PlanFormatter for TextFormatter {
    fn format(&self, plan: &BuildPlan) -> String {
        let mut out = String::new();
        writeln!(out, "Jacoco tool version: {}", plan.tool_version).unwrap();

        if plan.projects.iter().all(|p| p.specs.is_empty()) {
            out.push_str("\nNo report tasks to create.\n");
            return out;
        }

        for project in &plan.projects {
            if project.specs.is_empty() {
                continue;
            }
            writeln!(out, "\nproject '{}'", project.project).unwrap();
            for spec in &project.specs {
                write_spec(&mut out, spec);
            }
        }

        if let Some(root) = &plan.root {
            writeln!(out, "\nroot project").unwrap();
            writeln!(out, "  {} ({})", root.task_name, REPORT_TASK_GROUP).unwrap();
            writeln!(out, "    depends on: {}", join(&root.depends_on_report_tasks)).unwrap();
            writeln!(out, "    sources:    {}", join(&root.source_directories)).unwrap();
            writeln!(out, "    classes:    {}", join(&root.class_directory_includes)).unwrap();
            if !root.class_directory_excludes.is_empty() {
                writeln!(out, "    excludes:   {}", root.class_directory_excludes.join(", "))
                    .unwrap();
            }
            writeln!(out, "    exec data:  {}", join(&root.execution_data_paths)).unwrap();
            writeln!(out, "    reports:    {}", outputs_line(&root.outputs)).unwrap();
        }

        out
    }
}

fn write_spec(out: &mut String, spec: &ReportTaskSpec) {
    writeln!(out, "  {} ({})", spec.task_name, REPORT_TASK_GROUP).unwrap();
    writeln!(
        out,
        "    depends on: {} (report wired into check)",
        spec.depends_on_test_task
    )
    .unwrap();
    writeln!(out, "    sources:    {}", join(&spec.source_directories)).unwrap();
    writeln!(out, "    classes:    {}", join(&spec.class_directory_includes)).unwrap();
    if !spec.class_directory_excludes.is_empty() {
        writeln!(out, "    excludes:   {}", spec.class_directory_excludes.join(", ")).unwrap();
    }
    writeln!(out, "    exec data:  {}", join(&spec.execution_data_paths)).unwrap();
    writeln!(out, "    reports:    {}", outputs_line(&spec.outputs)).unwrap();
    if spec.feeds_root_report {
        writeln!(out, "    feeds {ROOT_REPORT_TASK}").unwrap();
    }
}

/// Markdown formatter.
pub struct MarkdownFormatter;

impl PlanFormatter for MarkdownFormatter {
    fn format(&self, plan: &BuildPlan) -> String {
        let mut md = String::new();
        writeln!(md, "## Jacoco report plan\n").unwrap();
        writeln!(md, "Tool version: `{}`\n", plan.tool_version).unwrap();

        if plan.projects.iter().all(|p| p.specs.is_empty()) {
            md.push_str("No report tasks to create.\n");
            return md;
        }

        md.push_str("| Project | Task | Test task | Aggregated |\n");
        md.push_str("|:--------|:-----|:----------|:----------:|\n");
        for project in &plan.projects {
            for spec in &project.specs {
                writeln!(
                    md,
                    "| `{}` | `{}` | `{}` | {} |",
                    project.project,
                    spec.task_name,
                    spec.depends_on_test_task,
                    if spec.feeds_root_report { "✓" } else { "" }
                )
                .unwrap();
            }
        }

        for project in &plan.projects {
            for spec in &project.specs {
                writeln!(md, "\n### `{}:{}`\n", project.project, spec.task_name).unwrap();
                writeln!(md, "- sources: {}", code_list(&spec.source_directories)).unwrap();
                writeln!(md, "- classes: {}", code_list(&spec.class_directory_includes)).unwrap();
                if !spec.class_directory_excludes.is_empty() {
                    let excludes: Vec<String> = spec
                        .class_directory_excludes
                        .iter()
                        .map(|e| format!("`{e}`"))
                        .collect();
                    writeln!(md, "- excludes: {}", excludes.join(", ")).unwrap();
                }
                writeln!(md, "- execution data: {}", code_list(&spec.execution_data_paths))
                    .unwrap();
                writeln!(md, "- reports: {}", outputs_line(&spec.outputs)).unwrap();
            }
        }

        if let Some(root) = &plan.root {
            writeln!(md, "\n### `{}`\n", root.task_name).unwrap();
            writeln!(md, "- aggregates: {}", code_list(&root.depends_on_report_tasks)).unwrap();
            writeln!(md, "- sources: {}", code_list(&root.source_directories)).unwrap();
            writeln!(md, "- execution data: {}", code_list(&root.execution_data_paths)).unwrap();
        }

        md
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn code_list(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(|v| format!("`{v}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn outputs_line(outputs: &ReportOutputs) -> String {
    let mut parts = Vec::new();
    if let Some(xml) = &outputs.xml {
        parts.push(format!("xml {xml}"));
    }
    if let Some(csv) = &outputs.csv {
        parts.push(format!("csv {csv}"));
    }
    if let Some(html) = &outputs.html {
        parts.push(format!("html {html}"));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{plan_build, BuildModel, ProjectModel};

    fn sample_plan() -> BuildPlan {
        let model = BuildModel {
            projects: vec![ProjectModel {
                name: "lib".to_string(),
                plugins: vec!["java".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        plan_build(&model).unwrap()
    }

    #[test]
    fn test_text_format_lists_tasks_and_root() {
        let out = TextFormatter.format(&sample_plan());
        assert!(out.contains("Jacoco tool version: 0.8.7"));
        assert!(out.contains("project 'lib'"));
        assert!(out.contains("jacocoTestReport (Reporting)"));
        assert!(out.contains("depends on: test"));
        assert!(out.contains("jacocoAggregatedReport"));
    }

    #[test]
    fn test_markdown_format_has_task_table() {
        let md = MarkdownFormatter.format(&sample_plan());
        assert!(md.contains("| Project | Task | Test task | Aggregated |"));
        assert!(md.contains("| `lib` | `jacocoTestReport` | `test` | ✓ |"));
        assert!(md.contains("### `jacocoAggregatedReport`"));
    }

    #[test]
    fn test_empty_plan_renders_notice() {
        let model = BuildModel {
            projects: vec![ProjectModel {
                name: "docs".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let plan = plan_build(&model).unwrap();
        let out = TextFormatter.format(&plan);
        assert!(out.contains("No report tasks to create."));
    }
}
