//! Strategy schema catalog consumed by configuration forms.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::{FieldKind, FieldSpec, SchemaRegistry, VariantSpec};
