pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod query;
pub mod session;
pub mod storage;
pub mod upload;
