pub mod communibase;
pub mod error;

pub use communibase::CommunibaseEntityTypeSource;
