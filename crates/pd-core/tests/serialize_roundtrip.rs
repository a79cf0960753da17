//! Integration tests: document tree ⇄ plain data (pd-core).
//!
//! Builds trees through the same operations the editor performs and checks
//! that serialization reproduces an observably identical tree: same ids,
//! types, field values, and child order.

use pd_core::document::Document;
use pd_core::serialize::{document_payload, from_value, load_roots, parse_payload, to_value};
use pd_core::{Component, ComponentId, ComponentType, CoreError, IdAllocator, PropValue};
use pretty_assertions::assert_eq;
use serde_json::json;

fn build_mixed_document() -> Document {
    let mut ids = IdAllocator::new();
    let mut doc = Document::new();

    let mut heading = Component::new(ids.allocate(), ComponentType::Heading);
    heading.set_field("text", "Welcome".into());
    heading.set_field("level", PropValue::Number(2));
    doc.push_root(heading);

    let mut container = Component::new(ids.allocate(), ComponentType::Container);
    let children = container.children_mut().unwrap();
    children.push(Component::new(ids.allocate(), ComponentType::Button));
    let mut link = Component::new(ids.allocate(), ComponentType::Link);
    link.set_field("url", "https://rust-lang.org".into());
    children.push(link);
    doc.push_root(container);

    let mut code = Component::new(ids.allocate(), ComponentType::Code);
    code.set_field("content", "fn main() { println!(\"hi\"); }".into());
    doc.push_root(code);

    doc
}

#[test]
fn roundtrip_reproduces_identical_tree() {
    let doc = build_mixed_document();

    let values: Vec<_> = doc.roots().iter().map(to_value).collect();
    let restored: Vec<Component> = values
        .iter()
        .map(|v| from_value(v).expect("known component"))
        .collect();

    assert_eq!(restored, doc.roots());
}

#[test]
fn roundtrip_survives_mutation_sequences() {
    let mut doc = build_mixed_document();

    // Mutate the way the editor does: field edits, removals, nested removal.
    doc.remove(ComponentId::new(3));
    if let Some(c) = doc.find_mut(ComponentId::new(1)) {
        c.set_field("text", "Edited".into());
    }

    let (restored, errors) = parse_payload(&document_payload(doc.roots())).unwrap();
    assert!(errors.is_empty());
    assert_eq!(restored, doc.roots());
}

#[test]
fn ids_stay_unique_across_nested_insertions() {
    let doc = build_mixed_document();

    let mut seen = Vec::new();
    for root in doc.roots() {
        seen.push(root.id);
        seen.extend(root.children().iter().map(|c| c.id));
    }
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), seen.len(), "duplicate id in tree: {seen:?}");
}

#[test]
fn child_order_is_preserved() {
    let doc = build_mixed_document();
    let container = doc.find(ComponentId::new(2)).unwrap();
    let (restored, _) = parse_payload(&document_payload(doc.roots())).unwrap();

    let restored_container = restored.iter().find(|c| c.id == container.id).unwrap();
    let order: Vec<_> = restored_container.children().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![ComponentId::new(3), ComponentId::new(4)]);
}

#[test]
fn bogus_component_never_becomes_a_phantom_node() {
    let values = [
        json!({"type": "bogus", "id": "comp-9"}),
        json!({"type": "button", "id": "comp-1", "label": "Ok"}),
    ];
    let (roots, errors) = load_roots(&values);

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, ComponentId::new(1));
    assert_eq!(
        errors,
        vec![CoreError::UnknownComponentType {
            found: "bogus".to_string()
        }]
    );
}
