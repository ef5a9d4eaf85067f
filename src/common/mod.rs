pub mod context;
pub mod de;
pub mod env;
pub mod error;
pub mod init;
pub mod query;
