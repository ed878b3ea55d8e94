pub mod meal;
pub mod user;
