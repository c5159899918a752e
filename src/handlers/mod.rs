pub mod admin;
pub mod games;
pub mod users;
