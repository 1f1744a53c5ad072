pub mod admin;
pub mod automation;
pub mod user;
