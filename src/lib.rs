//! Generates a Swagger 2.0 document from the entity-type metadata of a
//! Communibase administration.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
