//! SDK-style project skeleton generation

use crate::config::{EngineConfig, PlatformRequirement};
use crate::model::{Element, Node, ProjectDocument, CONDITION_ATTRIBUTE};
use crate::ops::condition::platform_condition;
use crate::ops::reconcile::TARGET_FRAMEWORK_PROPERTY;
use crate::ops::version::is_version_usable;

/// Produces brand-new SDK-style project documents
pub trait ProjectGenerator {
    /// Identifier written into the root `Sdk` attribute
    fn sdk_identifier(&self) -> &str;

    /// A fresh document for a project called `project_name`
    fn generate(&self, project_name: &str) -> ProjectDocument;
}

/// Generator for Godot .NET game projects
#[derive(Debug, Clone)]
pub struct GodotProjectGenerator {
    sdk_identifier: String,
    default_framework: String,
    requirements: Vec<PlatformRequirement>,
}

impl GodotProjectGenerator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            sdk_identifier: config.sdk_identifier.clone(),
            default_framework: config.default_framework.clone(),
            requirements: config.requirements.clone(),
        }
    }
}

impl Default for GodotProjectGenerator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl ProjectGenerator for GodotProjectGenerator {
    fn sdk_identifier(&self) -> &str {
        &self.sdk_identifier
    }

    fn generate(&self, project_name: &str) -> ProjectDocument {
        let mut project = ProjectDocument::empty();
        project.set_sdk(self.sdk_identifier.clone());
        project.root_mut().children.push(Node::Text("\n".to_string()));

        let group_index = project.add_property_group();
        if let Some(group) = project.property_group_mut(group_index) {
            group.push_child_element(
                Element::new(TARGET_FRAMEWORK_PROPERTY).with_text(self.default_framework.clone()),
            );

            // Platforms whose minimum is above the default get their own override
            for requirement in &self.requirements {
                if is_version_usable(&self.default_framework, &requirement.framework) {
                    continue;
                }
                group.push_child_element(
                    Element::new(TARGET_FRAMEWORK_PROPERTY)
                        .with_attribute(CONDITION_ATTRIBUTE, platform_condition(&requirement.platform))
                        .with_text(requirement.framework.clone()),
                );
            }

            group.push_child_element(Element::new("EnableDynamicLoading").with_text("true"));

            let root_namespace = sanitize_qualified_identifier(project_name);
            if root_namespace != project_name {
                group.push_child_element(Element::new("RootNamespace").with_text(root_namespace));
            }
        }

        project.push_epilog(Node::Text("\n".to_string()));
        project
    }
}

/// Turn a project name into a valid dotted C# namespace
///
/// Each dot-separated part has invalid characters replaced by `_` and gets
/// a leading `_` when it starts with a digit. Empty parts become `_`, and
/// a blank name becomes `Game`.
pub fn sanitize_qualified_identifier(name: &str) -> String {
    if name.trim().is_empty() {
        return "Game".to_string();
    }
    name.split('.')
        .map(sanitize_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

fn sanitize_identifier(part: &str) -> String {
    let mut identifier: String = part
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    match identifier.chars().next() {
        None => identifier.push('_'),
        Some(first) if first.is_ascii_digit() => identifier.insert(0, '_'),
        Some(_) => {}
    }
    identifier
}
