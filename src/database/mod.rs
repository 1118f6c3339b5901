pub mod connection;
pub mod models;
pub mod source;
pub mod seed;
