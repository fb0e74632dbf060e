mod connection;
pub use connection::Connection;

mod dialect;
pub use dialect::Dialect;
