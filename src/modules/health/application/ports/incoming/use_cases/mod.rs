mod check_connection;

pub use check_connection::{
    CheckConnectionError, CheckConnectionUseCase, ConnectionReport, WriteProbe,
};
