//! Detection of a project's coverage-relevant capabilities from its applied
//! plugin identifiers.
//!
//! Capabilities are derived once, after the host build system has finished
//! applying plugins, and are never re-queried mid-planning.

/// Gradle plugin identifiers the planner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginId {
    AndroidApplication,
    AndroidLibrary,
    AndroidDynamicFeature,
    AndroidFeature,
    AndroidInstantApp,
    AndroidTest,
    Java,
    JavaLibrary,
    JavaGradlePlugin,
    KotlinAndroid,
    KotlinJvm,
    KotlinMultiplatform,
}

impl PluginId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginId::AndroidApplication => "com.android.application",
            PluginId::AndroidLibrary => "com.android.library",
            PluginId::AndroidDynamicFeature => "com.android.dynamic-feature",
            PluginId::AndroidFeature => "com.android.feature",
            PluginId::AndroidInstantApp => "com.android.instantapp",
            PluginId::AndroidTest => "com.android.test",
            PluginId::Java => "java",
            PluginId::JavaLibrary => "java-library",
            PluginId::JavaGradlePlugin => "java-gradle-plugin",
            PluginId::KotlinAndroid => "org.jetbrains.kotlin.android",
            PluginId::KotlinJvm => "org.jetbrains.kotlin.jvm",
            PluginId::KotlinMultiplatform => "org.jetbrains.kotlin.multiplatform",
        }
    }

    /// Recognize a plugin identifier, returning `None` for ids that are not
    /// coverage-relevant. Projects apply plenty of unrelated plugins.
    pub fn recognize(id: &str) -> Option<PluginId> {
        match id {
            "com.android.application" => Some(PluginId::AndroidApplication),
            "com.android.library" => Some(PluginId::AndroidLibrary),
            "com.android.dynamic-feature" => Some(PluginId::AndroidDynamicFeature),
            "com.android.feature" => Some(PluginId::AndroidFeature),
            "com.android.instantapp" => Some(PluginId::AndroidInstantApp),
            "com.android.test" => Some(PluginId::AndroidTest),
            "java" => Some(PluginId::Java),
            "java-library" => Some(PluginId::JavaLibrary),
            "java-gradle-plugin" => Some(PluginId::JavaGradlePlugin),
            "org.jetbrains.kotlin.android" => Some(PluginId::KotlinAndroid),
            "org.jetbrains.kotlin.jvm" => Some(PluginId::KotlinJvm),
            "org.jetbrains.kotlin.multiplatform" => Some(PluginId::KotlinMultiplatform),
            _ => None,
        }
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of which ecosystems are present in a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildCapabilities {
    pub has_java_plugin: bool,
    /// Kotlin code compiled for the JVM: the Kotlin/JVM plugin, Kotlin
    /// applied on Android, or a multiplatform build with a JVM target.
    pub has_kotlin_jvm_plugin: bool,
    pub has_android_application: bool,
    pub has_android_library: bool,
    pub has_android_dynamic_feature: bool,
}

impl BuildCapabilities {
    /// Derive the capability set from applied plugin ids. `kotlin_targets`
    /// lists the target platforms of a multiplatform build ("jvm", "js", ...)
    /// and decides whether the multiplatform plugin counts as a JVM one.
    pub fn from_plugins<'a, I>(plugin_ids: I, kotlin_targets: &[String]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut capabilities = Self::default();
        for id in plugin_ids {
            match PluginId::recognize(id) {
                Some(PluginId::AndroidApplication) => capabilities.has_android_application = true,
                Some(PluginId::AndroidLibrary) => capabilities.has_android_library = true,
                Some(PluginId::AndroidDynamicFeature) => {
                    capabilities.has_android_dynamic_feature = true;
                }
                Some(PluginId::Java | PluginId::JavaLibrary | PluginId::JavaGradlePlugin) => {
                    capabilities.has_java_plugin = true;
                }
                Some(PluginId::KotlinAndroid | PluginId::KotlinJvm) => {
                    capabilities.has_kotlin_jvm_plugin = true;
                }
                Some(PluginId::KotlinMultiplatform) => {
                    if kotlin_targets.iter().any(|t| t == "jvm") {
                        capabilities.has_kotlin_jvm_plugin = true;
                    }
                }
                // Recognized but carrying no coverage capability of their own.
                Some(
                    PluginId::AndroidFeature | PluginId::AndroidInstantApp | PluginId::AndroidTest,
                ) => {}
                None => {}
            }
        }
        capabilities
    }

    /// Any Android variant-producing plugin applied.
    #[must_use]
    pub fn has_android(&self) -> bool {
        self.has_android_application || self.has_android_library || self.has_android_dynamic_feature
    }

    /// No coverage-relevant plugin applied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human-readable capability summary, e.g. "android-library, kotlin-jvm".
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.has_android_application {
            parts.push("android-application");
        }
        if self.has_android_library {
            parts.push("android-library");
        }
        if self.has_android_dynamic_feature {
            parts.push("android-dynamic-feature");
        }
        if self.has_kotlin_jvm_plugin {
            parts.push("kotlin-jvm");
        }
        if self.has_java_plugin {
            parts.push("java");
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
