pub mod insurance;
pub mod internship;
pub mod user;
