pub mod png;
pub mod validator;
