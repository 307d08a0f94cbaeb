//! Derivation of report task specs from a project's capabilities and build
//! variants.
//!
//! `plan_reports` is a pure transform: no I/O, no host queries, and identical
//! inputs always produce an identical plan. Dispatch precedence mirrors the
//! plugin lookup order: Android application, then Android library, then
//! dynamic feature, then Kotlin/JVM, then plain Java.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::capabilities::BuildCapabilities;
use crate::error::{PlanError, Result};
use crate::model::{ReportOutputs, ReportPlan, ReportTaskSpec, VariantDescriptor};
use crate::options::ReportOptions;

/// Languages whose conventional source roots feed every report.
const LANGUAGES: [&str; 2] = ["java", "kotlin"];

/// Derive the complete set of report task specs for one project.
///
/// `variants` is the host's registered Android build variants; it must be
/// empty for JVM-only projects and non-empty when an Android capability is
/// present. A project with no applicable capability yields an empty plan.
pub fn plan_reports(
    capabilities: &BuildCapabilities,
    variants: &[VariantDescriptor],
    options: &ReportOptions,
) -> Result<ReportPlan> {
    let specs = if capabilities.has_android() {
        plan_android(variants, options)?
    } else if capabilities.has_kotlin_jvm_plugin {
        vec![plan_jvm(
            "jacocoTestReportJvm",
            "jvmTest",
            "jvm",
            "Generate Jacoco coverage reports after running jvm tests.",
            &["src/commonMain/kotlin", "src/jvmMain/kotlin"],
            options,
        )]
    } else if capabilities.has_java_plugin {
        vec![plan_jvm(
            "jacocoTestReport",
            "test",
            "test",
            "Generate Jacoco coverage reports after running unit tests.",
            &["src/main/java", "src/main/kotlin"],
            options,
        )]
    } else {
        warn!("no coverage-relevant plugin applied; producing an empty plan");
        Vec::new()
    };

    Ok(ReportPlan {
        tool_version: options.tool_version.clone(),
        specs,
    })
}

fn plan_android(
    variants: &[VariantDescriptor],
    options: &ReportOptions,
) -> Result<Vec<ReportTaskSpec>> {
    if variants.is_empty() {
        return Err(PlanError::InvalidConfiguration(
            "an Android plugin is applied but no build variants are registered".to_string(),
        ));
    }

    let mut specs = Vec::with_capacity(variants.len());
    // source name -> variant name, to reject ambiguous task names
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for variant in variants {
        if variant.name.is_empty() {
            return Err(PlanError::InvalidConfiguration(
                "a registered build variant has an empty name".to_string(),
            ));
        }
        let source_name = variant.source_name().to_string();
        if let Some(previous) = seen.insert(source_name.clone(), variant.name.clone()) {
            return Err(PlanError::InvalidConfiguration(format!(
                "variants '{}' and '{}' both derive the report source name '{}'",
                previous, variant.name, source_name
            )));
        }
        specs.push(plan_variant(variant, options));
    }
    Ok(specs)
}

fn plan_variant(variant: &VariantDescriptor, options: &ReportOptions) -> ReportTaskSpec {
    let source_name = variant.source_name();
    let test_task = format!("test{}", capitalize(source_name));
    let feeds_root_report = options.root_report.selects(variant);
    debug!(
        variant = variant.name.as_str(),
        source_name, feeds_root_report, "planning variant report task"
    );

    let mut source_directories = BTreeSet::new();
    for source_set in source_sets(variant) {
        for language in LANGUAGES {
            source_directories.insert(format!("src/{source_set}/{language}"));
        }
    }

    let mut class_directory_includes = BTreeSet::new();
    if let Some(flavor) = variant.flavor() {
        // Kotlin-Android has staged compiled classes under both the nested
        // flavor/type path and the flat variant-name path, depending on the
        // plugin version. Include both so either layout is picked up.
        if let Some(build_type) = variant.build_type() {
            class_directory_includes
                .insert(format!("**/tmp/kotlin-classes/{flavor}/{build_type}/**"));
        }
        class_directory_includes.insert(format!("**/tmp/kotlin-classes/{}/**", variant.name));
    } else {
        class_directory_includes.insert(format!("**/tmp/kotlin-classes/{source_name}/**"));
    }

    ReportTaskSpec {
        task_name: format!("jacocoTestReport{}", capitalize(source_name)),
        description: format!(
            "Generate Jacoco coverage reports after running {} tests.",
            variant.name
        ),
        source_name: source_name.to_string(),
        source_directories,
        class_directory_includes,
        class_directory_excludes: options.global_class_excludes.clone(),
        execution_data_paths: BTreeSet::from([format!("build/jacoco/{test_task}.exec")]),
        depends_on_test_task: test_task,
        feeds_root_report,
        outputs: ReportOutputs::for_source(source_name, options),
    }
}

/// Source sets contributing to a variant's report: main, the variant itself,
/// and its flavor and build type when present.
fn source_sets(variant: &VariantDescriptor) -> Vec<&str> {
    let mut sets = vec!["main", variant.name.as_str()];
    if let Some(flavor) = variant.flavor() {
        sets.push(flavor);
    }
    if let Some(build_type) = variant.build_type() {
        sets.push(build_type);
    }
    sets
}

fn plan_jvm(
    task_name: &str,
    test_task: &str,
    source_name: &str,
    description: &str,
    source_directories: &[&str],
    options: &ReportOptions,
) -> ReportTaskSpec {
    ReportTaskSpec {
        task_name: task_name.to_string(),
        description: description.to_string(),
        source_name: source_name.to_string(),
        source_directories: source_directories.iter().map(|d| (*d).to_string()).collect(),
        class_directory_includes: BTreeSet::from(["**/classes/**/main/**".to_string()]),
        class_directory_excludes: options.global_class_excludes.clone(),
        execution_data_paths: BTreeSet::from([format!("build/jacoco/{test_task}.exec")]),
        depends_on_test_task: test_task.to_string(),
        // JVM reports always aggregate; the selector is a variant policy.
        feeds_root_report: true,
        outputs: ReportOutputs::for_source(source_name, options),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
