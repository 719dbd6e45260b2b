pub mod cache;
pub mod clients;
pub mod config;
pub mod http;
