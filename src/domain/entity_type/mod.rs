pub mod attribute;
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use attribute::{AllowableValues, AttributeDescriptor};
pub use entity::EntityTypeDescriptor;
pub use repository::EntityTypeSource;
pub use value_objects::{AttributeType, PrimitiveType};
