// Infrastructure layer - External dependencies and adapters
pub mod analysis_api;
pub mod config;
pub mod file_store;
pub mod share_codec;
