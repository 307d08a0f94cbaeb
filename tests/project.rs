mod common;

use jacoplan::error::PlanError;
use jacoplan::options::RootReportSelector;
use jacoplan::project::{plan_build, BuildModel};

#[test]
fn multi_project_build_aggregates_across_projects() {
    let model = common::build_of(vec![
        common::android_library("app", vec![common::variant("debug", "debug", "")]),
        common::java_project("core"),
    ]);

    let plan = plan_build(&model).unwrap();

    assert_eq!(plan.projects.len(), 2);
    let root = plan.root.unwrap();
    assert!(root
        .depends_on_report_tasks
        .contains(":app:jacocoTestReportDebug"));
    assert!(root
        .depends_on_report_tasks
        .contains(":core:jacocoTestReport"));
    // Android and JVM class layouts are both present in the union.
    assert!(root
        .class_directory_includes
        .contains("**/tmp/kotlin-classes/debug/**"));
    assert!(root
        .class_directory_includes
        .contains("**/classes/**/main/**"));
}

#[test]
fn ignored_projects_are_skipped() {
    let mut model = common::build_of(vec![
        common::android_library("app", vec![common::variant("debug", "debug", "")]),
        common::java_project("core"),
    ]);
    model.ignore = vec!["app".to_string()];

    let plan = plan_build(&model).unwrap();

    assert_eq!(plan.projects.len(), 1);
    assert_eq!(plan.projects[0].project, "core");
    let root = plan.root.unwrap();
    assert!(!root
        .depends_on_report_tasks
        .iter()
        .any(|t| t.starts_with(":app:")));
}

#[test]
fn ignoring_a_broken_project_avoids_its_error() {
    // "app" is invalid (Android plugin, no variants) but ignored, so the
    // build plan still succeeds.
    let mut model = common::build_of(vec![
        common::android_library("app", vec![]),
        common::java_project("core"),
    ]);
    model.ignore = vec!["app".to_string()];

    let plan = plan_build(&model).unwrap();
    assert_eq!(plan.projects.len(), 1);
}

#[test]
fn properties_configure_every_project() {
    let mut model = common::build_of(vec![
        common::android_library("app", vec![common::variant("debug", "debug", "")]),
        common::java_project("core"),
    ]);
    model.properties.insert(
        "jacocoConfig.version".to_string(),
        "0.8.12".to_string(),
    );
    model.properties.insert(
        "jacocoConfig.globalExcludes".to_string(),
        "**/R.class,**/BuildConfig.*".to_string(),
    );
    model
        .properties
        .insert("jacocoConfig.html.disabled".to_string(), String::new());

    let plan = plan_build(&model).unwrap();

    assert_eq!(plan.tool_version, "0.8.12");
    for project in &plan.projects {
        for spec in &project.specs {
            assert_eq!(
                spec.class_directory_excludes,
                vec!["**/R.class", "**/BuildConfig.*"]
            );
            assert_eq!(spec.outputs.html, None);
            assert!(spec.outputs.xml.is_some());
        }
    }
    assert_eq!(plan.root.unwrap().outputs.html, None);
}

#[test]
fn root_report_selector_override_widens_aggregation() {
    let mut model = common::build_of(vec![common::android_library(
        "app",
        vec![
            common::variant("debug", "debug", ""),
            common::variant("paidRelease", "release", "paid"),
        ],
    )]);
    model.root_report = Some(RootReportSelector::All);

    let plan = plan_build(&model).unwrap();

    let root = plan.root.unwrap();
    assert_eq!(root.depends_on_report_tasks.len(), 2);
    assert!(root
        .depends_on_report_tasks
        .contains(":app:jacocoTestReportPaidRelease"));
}

#[test]
fn failing_project_aborts_the_build_plan_with_context() {
    let model = common::build_of(vec![
        common::java_project("core"),
        common::android_library("app", vec![]),
    ]);

    let err = plan_build(&model).unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("project 'app'"));
}

#[test]
fn project_with_no_relevant_plugins_plans_nothing() {
    let model = common::build_of(vec![
        common::java_project("core"),
        jacoplan::project::ProjectModel {
            name: "docs".to_string(),
            plugins: vec!["org.jetbrains.dokka".to_string()],
            ..Default::default()
        },
    ]);

    let plan = plan_build(&model).unwrap();

    let docs = plan
        .projects
        .iter()
        .find(|p| p.project == "docs")
        .unwrap();
    assert!(docs.specs.is_empty());
}

#[test]
fn build_model_json_round_trip() {
    let json = r#"{
        "properties": {"jacocoConfig.version": "0.8.8"},
        "ignore": ["sample"],
        "root_report": {"build_type": "release"},
        "projects": [
            {
                "name": "shared",
                "plugins": ["org.jetbrains.kotlin.multiplatform"],
                "kotlin_targets": ["jvm", "js"]
            }
        ]
    }"#;

    let model = BuildModel::from_json(json).unwrap();
    assert_eq!(
        model.root_report,
        Some(RootReportSelector::BuildType("release".to_string()))
    );

    let plan = plan_build(&model).unwrap();
    assert_eq!(plan.tool_version, "0.8.8");
    assert_eq!(plan.projects[0].specs[0].task_name, "jacocoTestReportJvm");
    assert_eq!(plan.projects[0].specs[0].depends_on_test_task, "jvmTest");

    let reparsed = BuildModel::from_json(&serde_json::to_string(&model).unwrap()).unwrap();
    assert_eq!(reparsed, model);
}

#[test]
fn kmp_without_jvm_target_plans_nothing() {
    let model = common::build_of(vec![jacoplan::project::ProjectModel {
        name: "shared".to_string(),
        plugins: vec!["org.jetbrains.kotlin.multiplatform".to_string()],
        kotlin_targets: vec!["js".to_string(), "ios".to_string()],
        ..Default::default()
    }]);

    let plan = plan_build(&model).unwrap();
    assert!(plan.projects[0].specs.is_empty());
    assert!(plan.root.is_none());
}
