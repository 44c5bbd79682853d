pub mod entity_type;
pub mod errors;
pub mod swagger;
