pub mod config;
pub mod logging;

pub mod genai;
pub mod http;
pub mod listing;
pub mod relay;
pub mod resolve;
