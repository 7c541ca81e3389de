pub mod company;
pub mod job;

pub use company::Entity as Company;
pub use job::Entity as Job;
