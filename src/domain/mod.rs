pub mod auth;
pub mod command;
pub mod skin;
