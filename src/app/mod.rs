pub mod convert_service;
pub mod upload_service;
