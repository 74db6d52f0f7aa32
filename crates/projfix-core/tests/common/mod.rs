use projfix_core::model::{Element, Node, ProjectDocument};

pub const IOS: &str = " '$(GodotTargetPlatform)' == 'ios' ";
pub const ANDROID: &str = " '$(GodotTargetPlatform)' == 'android' ";

/// `<TargetFramework>` with an optional condition
#[allow(dead_code)]
pub fn tf(value: &str, condition: Option<&str>) -> Element {
    property("TargetFramework", value, condition)
}

#[allow(dead_code)]
pub fn property(name: &str, value: &str, condition: Option<&str>) -> Element {
    let element = Element::new(name).with_text(value);
    match condition {
        Some(condition) => element.with_attribute("Condition", condition),
        None => element,
    }
}

#[allow(dead_code)]
pub fn group(condition: Option<&str>, props: Vec<Element>) -> Element {
    let mut group = Element::new("PropertyGroup");
    if let Some(condition) = condition {
        group.set_attribute("Condition", condition);
    }
    group.children = props.into_iter().map(Node::Element).collect();
    group
}

/// An SDK-style project holding the given property groups
#[allow(dead_code)]
pub fn project(groups: Vec<Element>) -> ProjectDocument {
    let mut root = Element::new("Project").with_attribute("Sdk", "Godot.NET.Sdk/4.4.0");
    root.children = groups.into_iter().map(Node::Element).collect();
    ProjectDocument::new(root).expect("Project root")
}

/// Every `TargetFramework` in document order as `(value, own condition, group condition)`
#[allow(dead_code)]
pub fn target_frameworks(project: &ProjectDocument) -> Vec<(String, Option<String>, Option<String>)> {
    project
        .property_groups()
        .flat_map(|(_, group)| {
            group
                .child_elements()
                .filter(|prop| prop.name == "TargetFramework")
                .map(move |prop| {
                    (
                        prop.text(),
                        prop.attribute("Condition").map(str::to_string),
                        group.attribute("Condition").map(str::to_string),
                    )
                })
        })
        .collect()
}
