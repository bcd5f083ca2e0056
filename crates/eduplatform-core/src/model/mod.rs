pub mod entity;
pub mod field;

pub use entity::{CatalogEntity, EntityModel};
pub use field::{FieldText, SearchField, SortRule};
