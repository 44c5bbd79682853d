// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod source;

pub use source::{FailingSource, InMemorySource};
