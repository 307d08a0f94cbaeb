use jacoplan::model::VariantDescriptor;
use jacoplan::project::{BuildModel, ProjectModel};

/// Build a variant descriptor from plain strings; an empty build type or
/// flavor means absent.
pub fn variant(name: &str, build_type: &str, flavor: &str) -> VariantDescriptor {
    VariantDescriptor::new(
        name,
        (!build_type.is_empty()).then_some(build_type),
        (!flavor.is_empty()).then_some(flavor),
    )
}

pub fn android_library(name: &str, variants: Vec<VariantDescriptor>) -> ProjectModel {
    ProjectModel {
        name: name.to_string(),
        plugins: vec![
            "com.android.library".to_string(),
            "org.jetbrains.kotlin.android".to_string(),
        ],
        kotlin_targets: Vec::new(),
        variants,
    }
}

pub fn java_project(name: &str) -> ProjectModel {
    ProjectModel {
        name: name.to_string(),
        plugins: vec!["java".to_string()],
        ..Default::default()
    }
}

pub fn build_of(projects: Vec<ProjectModel>) -> BuildModel {
    BuildModel {
        projects,
        ..Default::default()
    }
}
