pub mod config;
pub mod preview;
pub mod record;
pub mod scoring;
