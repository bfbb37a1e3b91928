pub mod catalog;
pub mod schema;

pub use catalog::Registry;
pub use schema::{BlockSchema, FieldKind, FieldSchema, PaletteGroup};
