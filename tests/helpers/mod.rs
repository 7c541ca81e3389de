pub mod builders;
pub mod db;
pub mod server;

pub use builders::{CompanyBuilder, JobBuilder};
pub use db::TestDb;
pub use server::TestServer;
