mod check_connection_service;

pub use check_connection_service::CheckConnectionService;
