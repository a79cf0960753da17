pub mod document;
pub mod error;
pub mod id;
pub mod model;
pub mod render;
pub mod serialize;

pub use document::Document;
pub use error::CoreError;
pub use id::{ComponentId, IdAllocator};
pub use model::{
    Component, ComponentKind, ComponentType, InputKind, PropValue, PropertyDescriptor, descriptors,
};
pub use render::{export_document, render, render_child, render_export};
