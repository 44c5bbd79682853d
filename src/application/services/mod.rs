pub mod attribute_mapper;
pub mod entity_assembler;
pub mod generator;

pub use attribute_mapper::{AttributeMapper, ObjectIdMode};
pub use entity_assembler::{DocumentMetadata, EntityAssembler};
pub use generator::SwaggerGenerator;
