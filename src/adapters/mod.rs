pub mod download;
pub mod http;
pub mod transport;
