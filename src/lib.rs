pub mod browser;
pub mod cli;
pub mod config;
pub mod export;
pub mod input;
pub mod reshape;
pub mod scrape;
