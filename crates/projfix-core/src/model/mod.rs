pub mod node;
pub mod project;

pub use node::{Conditioned, Element, Node};
pub use project::ProjectDocument;

/// Root element name of every project document
pub const PROJECT_ELEMENT: &str = "Project";
/// Element name of a property group
pub const PROPERTY_GROUP_ELEMENT: &str = "PropertyGroup";
/// Attribute holding the SDK identifier on the root element
pub const SDK_ATTRIBUTE: &str = "Sdk";
/// Attribute holding an element's condition expression
pub const CONDITION_ATTRIBUTE: &str = "Condition";
