//! Configuration and client-side storage for repo-onboard
//!
//! This crate provides:
//! - Platform paths for config and cache files
//! - Configuration file loading (TOML) with environment overrides
//! - Application configuration (AppConfig)
//! - Client storage (local + session scopes) cleared on login

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod storage;

pub use app_config::{AppConfig, BASE_URL_ENV};
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
pub use storage::{
    ClientStorage, MemoryStorage, PersistedStorage, StorageScope, SESSION_COOKIE_KEY,
};
