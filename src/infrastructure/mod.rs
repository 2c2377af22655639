pub mod codec;
pub mod filesystem;
pub mod http;
