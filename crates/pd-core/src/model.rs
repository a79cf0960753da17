//! Core component model for pagedraft documents.
//!
//! A document is an ordered forest of [`Component`] values. Each component
//! is a tagged variant carrying its own editable fields; only the container
//! variant holds children. Behavior (rendering, property descriptors) is
//! dispatched through constant lookup tables keyed by [`ComponentType`] —
//! persisted data never carries behavior.

use crate::error::CoreError;
use crate::id::ComponentId;
use serde::Serialize;
use std::fmt;

// ─── Type tags ───────────────────────────────────────────────────────────

/// The fixed palette of component variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Heading,
    Text,
    Button,
    Input,
    Checkbox,
    Link,
    Code,
    Container,
}

impl ComponentType {
    /// Every variant, in palette order.
    pub const ALL: [ComponentType; 8] = [
        ComponentType::Heading,
        ComponentType::Text,
        ComponentType::Button,
        ComponentType::Input,
        ComponentType::Checkbox,
        ComponentType::Link,
        ComponentType::Code,
        ComponentType::Container,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentType::Heading => "heading",
            ComponentType::Text => "text",
            ComponentType::Button => "button",
            ComponentType::Input => "input",
            ComponentType::Checkbox => "checkbox",
            ComponentType::Link => "link",
            ComponentType::Code => "code",
            ComponentType::Container => "container",
        }
    }

    /// Resolve a persisted type tag.
    pub fn from_tag(tag: &str) -> Result<Self, CoreError> {
        match tag {
            "heading" => Ok(ComponentType::Heading),
            "text" => Ok(ComponentType::Text),
            "button" => Ok(ComponentType::Button),
            "input" => Ok(ComponentType::Input),
            "checkbox" => Ok(ComponentType::Checkbox),
            "link" => Ok(ComponentType::Link),
            "code" => Ok(ComponentType::Code),
            "container" => Ok(ComponentType::Container),
            _ => Err(CoreError::UnknownComponentType { found: tag.to_string() }),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Property descriptors ────────────────────────────────────────────────

/// Which control the properties panel uses for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    TextArea,
}

/// One editable field of a variant: descriptor lists are constant per type
/// tag and never persisted per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

const fn text_field(name: &'static str, label: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        label,
        input: InputKind::Text,
        min: None,
        max: None,
    }
}

const fn textarea_field(name: &'static str, label: &'static str) -> PropertyDescriptor {
    PropertyDescriptor {
        name,
        label,
        input: InputKind::TextArea,
        min: None,
        max: None,
    }
}

/// The ordered descriptor list for a type tag.
pub fn descriptors(ty: ComponentType) -> &'static [PropertyDescriptor] {
    const HEADING: &[PropertyDescriptor] = &[
        text_field("text", "Text"),
        PropertyDescriptor {
            name: "level",
            label: "Level (1-6)",
            input: InputKind::Number,
            min: Some(1),
            max: Some(6),
        },
    ];
    const TEXT: &[PropertyDescriptor] = &[textarea_field("content", "Content")];
    const BUTTON: &[PropertyDescriptor] = &[text_field("label", "Button Text")];
    const INPUT: &[PropertyDescriptor] = &[text_field("placeholder", "Placeholder")];
    const CHECKBOX: &[PropertyDescriptor] = &[text_field("label", "Label")];
    const LINK: &[PropertyDescriptor] =
        &[text_field("text", "Link Text"), text_field("url", "URL")];
    const CODE: &[PropertyDescriptor] = &[textarea_field("content", "Code")];
    const CONTAINER: &[PropertyDescriptor] = &[];

    match ty {
        ComponentType::Heading => HEADING,
        ComponentType::Text => TEXT,
        ComponentType::Button => BUTTON,
        ComponentType::Input => INPUT,
        ComponentType::Checkbox => CHECKBOX,
        ComponentType::Link => LINK,
        ComponentType::Code => CODE,
        ComponentType::Container => CONTAINER,
    }
}

// ─── Property values ─────────────────────────────────────────────────────

/// A value arriving from the properties panel. Panel controls hand text
/// back for every input kind, so numeric fields accept either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Text(String),
    Number(i64),
}

impl PropValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            PropValue::Text(s) => s,
            PropValue::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<i64> for PropValue {
    fn from(n: i64) -> Self {
        PropValue::Number(n)
    }
}

// ─── Component variants ──────────────────────────────────────────────────

/// Variant data for a component. Serializes flat alongside the id, with the
/// tag under `"type"` — the saved-document shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentKind {
    Heading {
        level: u8,
        text: String,
    },
    Text {
        content: String,
    },
    Button {
        label: String,
    },
    Input {
        placeholder: String,
    },
    Checkbox {
        label: String,
    },
    Link {
        text: String,
        url: String,
    },
    Code {
        content: String,
    },
    Container {
        children: Vec<Component>,
    },
}

impl ComponentKind {
    /// Variant defaults for a type tag — the palette templates.
    pub fn default_for(ty: ComponentType) -> Self {
        match ty {
            ComponentType::Heading => ComponentKind::Heading {
                level: 1,
                text: "Heading".to_string(),
            },
            ComponentType::Text => ComponentKind::Text {
                content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
            },
            ComponentType::Button => ComponentKind::Button {
                label: "Click Me".to_string(),
            },
            ComponentType::Input => ComponentKind::Input {
                placeholder: "Enter text...".to_string(),
            },
            ComponentType::Checkbox => ComponentKind::Checkbox {
                label: "Checkbox label".to_string(),
            },
            ComponentType::Link => ComponentKind::Link {
                text: "Click here".to_string(),
                url: "https://example.com".to_string(),
            },
            ComponentType::Code => ComponentKind::Code {
                content: "const hello = \"world\";".to_string(),
            },
            ComponentType::Container => ComponentKind::Container {
                children: Vec::new(),
            },
        }
    }

    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentKind::Heading { .. } => ComponentType::Heading,
            ComponentKind::Text { .. } => ComponentType::Text,
            ComponentKind::Button { .. } => ComponentType::Button,
            ComponentKind::Input { .. } => ComponentType::Input,
            ComponentKind::Checkbox { .. } => ComponentType::Checkbox,
            ComponentKind::Link { .. } => ComponentType::Link,
            ComponentKind::Code { .. } => ComponentType::Code,
            ComponentKind::Container { .. } => ComponentType::Container,
        }
    }
}

// ─── Component ───────────────────────────────────────────────────────────

/// A single element of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub id: ComponentId,
    #[serde(flatten)]
    pub kind: ComponentKind,
}

impl Component {
    /// Instantiate a variant's defaults under a freshly assigned id.
    pub fn new(id: ComponentId, ty: ComponentType) -> Self {
        Self {
            id,
            kind: ComponentKind::default_for(ty),
        }
    }

    pub fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    pub fn descriptors(&self) -> &'static [PropertyDescriptor] {
        descriptors(self.component_type())
    }

    /// Child sequence; empty for every non-container variant.
    pub fn children(&self) -> &[Component] {
        match &self.kind {
            ComponentKind::Container { children } => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Component>> {
        match &mut self.kind {
            ComponentKind::Container { children } => Some(children),
            _ => None,
        }
    }

    /// Whether `id` names this component or one of its children.
    pub fn contains(&self, id: ComponentId) -> bool {
        self.id == id || self.children().iter().any(|c| c.contains(id))
    }

    /// Read a field by descriptor name.
    pub fn field(&self, name: &str) -> Option<PropValue> {
        match (&self.kind, name) {
            (ComponentKind::Heading { text, .. }, "text") => Some(text.as_str().into()),
            (ComponentKind::Heading { level, .. }, "level") => Some(PropValue::Number(*level as i64)),
            (ComponentKind::Text { content }, "content") => Some(content.as_str().into()),
            (ComponentKind::Button { label }, "label") => Some(label.as_str().into()),
            (ComponentKind::Input { placeholder }, "placeholder") => {
                Some(placeholder.as_str().into())
            }
            (ComponentKind::Checkbox { label }, "label") => Some(label.as_str().into()),
            (ComponentKind::Link { text, .. }, "text") => Some(text.as_str().into()),
            (ComponentKind::Link { url, .. }, "url") => Some(url.as_str().into()),
            (ComponentKind::Code { content }, "content") => Some(content.as_str().into()),
            _ => None,
        }
    }

    /// Write a field by descriptor name. Returns whether the value applied;
    /// unknown names and unparseable numbers leave the component untouched.
    pub fn set_field(&mut self, name: &str, value: PropValue) -> bool {
        match (&mut self.kind, name) {
            (ComponentKind::Heading { text, .. }, "text") => {
                *text = value.into_text();
                true
            }
            (ComponentKind::Heading { level, .. }, "level") => match value.as_number() {
                // Descriptor range 1..=6; out-of-range edits clamp.
                Some(n) => {
                    *level = n.clamp(1, 6) as u8;
                    true
                }
                None => false,
            },
            (ComponentKind::Text { content }, "content") => {
                *content = value.into_text();
                true
            }
            (ComponentKind::Button { label }, "label") => {
                *label = value.into_text();
                true
            }
            (ComponentKind::Input { placeholder }, "placeholder") => {
                *placeholder = value.into_text();
                true
            }
            (ComponentKind::Checkbox { label }, "label") => {
                *label = value.into_text();
                true
            }
            (ComponentKind::Link { text, .. }, "text") => {
                *text = value.into_text();
                true
            }
            (ComponentKind::Link { url, .. }, "url") => {
                *url = value.into_text();
                true
            }
            (ComponentKind::Code { content }, "content") => {
                *content = value.into_text();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn type_tag_roundtrip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::from_tag(ty.as_str()), Ok(ty));
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(
            ComponentType::from_tag("bogus"),
            Err(CoreError::UnknownComponentType {
                found: "bogus".to_string()
            })
        );
    }

    #[test]
    fn heading_defaults() {
        let c = Component::new(ComponentId::new(1), ComponentType::Heading);
        assert_eq!(c.field("level"), Some(PropValue::Number(1)));
        assert_eq!(c.field("text"), Some(PropValue::Text("Heading".into())));
    }

    #[test]
    fn descriptors_are_ordered_and_constant() {
        let heading = descriptors(ComponentType::Heading);
        assert_eq!(heading.len(), 2);
        assert_eq!(heading[0].name, "text");
        assert_eq!(heading[1].name, "level");
        assert_eq!(heading[1].min, Some(1));
        assert_eq!(heading[1].max, Some(6));

        assert!(descriptors(ComponentType::Container).is_empty());
    }

    #[test]
    fn every_descriptor_field_is_readable() {
        for ty in ComponentType::ALL {
            let c = Component::new(ComponentId::new(1), ty);
            for desc in c.descriptors() {
                assert!(
                    c.field(desc.name).is_some(),
                    "{ty} field `{}` must hold a defined value",
                    desc.name
                );
            }
        }
    }

    #[test]
    fn set_field_updates_in_place() {
        let mut c = Component::new(ComponentId::new(1), ComponentType::Button);
        assert!(c.set_field("label", "Submit".into()));
        assert_eq!(c.field("label"), Some(PropValue::Text("Submit".into())));
    }

    #[test]
    fn heading_level_clamps_to_descriptor_range() {
        let mut c = Component::new(ComponentId::new(1), ComponentType::Heading);
        assert!(c.set_field("level", PropValue::Number(9)));
        assert_eq!(c.field("level"), Some(PropValue::Number(6)));

        // Panel inputs arrive as text.
        assert!(c.set_field("level", "3".into()));
        assert_eq!(c.field("level"), Some(PropValue::Number(3)));

        assert!(!c.set_field("level", "not a number".into()));
        assert_eq!(c.field("level"), Some(PropValue::Number(3)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut c = Component::new(ComponentId::new(1), ComponentType::Text);
        assert!(!c.set_field("label", "x".into()));
        assert_eq!(c.field("label"), None);
    }

    #[test]
    fn contains_looks_through_children() {
        let mut container = Component::new(ComponentId::new(1), ComponentType::Container);
        container
            .children_mut()
            .unwrap()
            .push(Component::new(ComponentId::new(2), ComponentType::Button));

        assert!(container.contains(ComponentId::new(1)));
        assert!(container.contains(ComponentId::new(2)));
        assert!(!container.contains(ComponentId::new(3)));
    }
}
