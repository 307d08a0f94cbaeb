//! Command handler functions for the jacoplan CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;

use crate::aggregate::ROOT_REPORT_TASK;
use crate::project::{plan_build, BuildModel};
use crate::render::{MarkdownFormatter, PlanFormatter, TextFormatter};

/// Output style for the `plan` command.
#[derive(Clone, ValueEnum)]
pub enum Style {
    Text,
    Markdown,
    Json,
}

pub fn cmd_plan(model_path: &Path, style: &Style) -> Result<String> {
    let model = BuildModel::from_path(model_path)?;
    let plan = plan_build(&model)?;
    let out = match style {
        Style::Text => TextFormatter.format(&plan),
        Style::Markdown => MarkdownFormatter.format(&plan),
        Style::Json => {
            let mut json = serde_json::to_string_pretty(&plan)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

pub fn cmd_capabilities(model_path: &Path) -> Result<String> {
    let model = BuildModel::from_path(model_path)?;
    if model.projects.is_empty() {
        return Ok("No projects in build model.\n".to_string());
    }
    let mut out = String::new();
    writeln!(out, "{:<30} CAPABILITIES", "PROJECT").unwrap();
    writeln!(out, "{}", "-".repeat(70)).unwrap();
    for project in &model.projects {
        writeln!(out, "{:<30} {}", project.name, project.capabilities().describe()).unwrap();
    }
    Ok(out)
}

pub fn cmd_tasks(model_path: &Path) -> Result<String> {
    let model = BuildModel::from_path(model_path)?;
    let plan = plan_build(&model)?;

    let mut out = String::new();
    writeln!(out, "{:<45} {:<25} AGGREGATED", "TASK", "DEPENDS ON").unwrap();
    writeln!(out, "{}", "-".repeat(85)).unwrap();
    for project in &plan.projects {
        for spec in &project.specs {
            writeln!(
                out,
                "{:<45} {:<25} {}",
                format!(":{}:{}", project.project, spec.task_name),
                spec.depends_on_test_task,
                if spec.feeds_root_report { "yes" } else { "" }
            )
            .unwrap();
        }
    }
    if let Some(root) = &plan.root {
        writeln!(
            out,
            "{:<45} {:<25}",
            format!(":{ROOT_REPORT_TASK}"),
            root.depends_on_report_tasks.len().to_string() + " report tasks"
        )
        .unwrap();
    }
    Ok(out)
}
