//! Signed requests, response normalisation and concurrent dispatch for the
//! Youdao, Microsoft and Baidu translation APIs.

pub mod config;
pub mod languages;
pub mod orchestrator;
pub mod provider;
pub mod request;
pub mod sign;
pub mod translate;
pub mod transport;
