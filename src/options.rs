//! User-configurable report options, with Gradle-property overrides layered
//! over the defaults the way the plugin extension resolves them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::VariantDescriptor;

pub const PROPERTY_VERSION: &str = "jacocoConfig.version";
pub const PROPERTY_XML_DISABLED: &str = "jacocoConfig.xml.disabled";
pub const PROPERTY_CSV_DISABLED: &str = "jacocoConfig.csv.disabled";
pub const PROPERTY_HTML_DISABLED: &str = "jacocoConfig.html.disabled";
pub const PROPERTY_GLOBAL_EXCLUDES: &str = "jacocoConfig.globalExcludes";

pub const DEFAULT_TOOL_VERSION: &str = "0.8.7";

/// Selects which build variants feed the aggregated root report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootReportSelector {
    /// The "debug" build type with no product flavor.
    DefaultDebug,
    /// A named build type with no product flavor.
    BuildType(String),
    /// An explicit set of variant names.
    Variants(Vec<String>),
    /// Every variant.
    All,
    /// No variant.
    None,
}

impl Default for RootReportSelector {
    fn default() -> Self {
        RootReportSelector::DefaultDebug
    }
}

impl RootReportSelector {
    #[must_use]
    pub fn selects(&self, variant: &VariantDescriptor) -> bool {
        match self {
            RootReportSelector::DefaultDebug => {
                variant.build_type() == Some("debug") && variant.flavor().is_none()
            }
            RootReportSelector::BuildType(build_type) => {
                variant.build_type() == Some(build_type.as_str()) && variant.flavor().is_none()
            }
            RootReportSelector::Variants(names) => names.iter().any(|n| n == &variant.name),
            RootReportSelector::All => true,
            RootReportSelector::None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub tool_version: String,
    /// Class-directory exclusion globs applied to every report, verbatim.
    pub global_class_excludes: Vec<String>,
    pub xml_enabled: bool,
    pub csv_enabled: bool,
    pub html_enabled: bool,
    pub root_report: RootReportSelector,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            tool_version: DEFAULT_TOOL_VERSION.to_string(),
            global_class_excludes: Vec::new(),
            xml_enabled: true,
            csv_enabled: true,
            html_enabled: true,
            root_report: RootReportSelector::default(),
        }
    }
}

impl ReportOptions {
    /// Layer Gradle-style property overrides over the defaults. A
    /// `*.disabled` key disables its format by mere presence, regardless of
    /// value, matching the plugin's `hasProperty` behavior.
    #[must_use]
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        let mut options = Self::default();
        if let Some(version) = properties.get(PROPERTY_VERSION) {
            options.tool_version = version.clone();
        }
        if let Some(globs) = properties.get(PROPERTY_GLOBAL_EXCLUDES) {
            options.global_class_excludes = globs
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(String::from)
                .collect();
        }
        options.xml_enabled = !properties.contains_key(PROPERTY_XML_DISABLED);
        options.csv_enabled = !properties.contains_key(PROPERTY_CSV_DISABLED);
        options.html_enabled = !properties.contains_key(PROPERTY_HTML_DISABLED);
        options
    }
}
