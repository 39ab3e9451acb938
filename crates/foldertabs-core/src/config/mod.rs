//! Configuration management for FolderTabs.
//!
//! User preferences ([`settings::Config`]) and colors ([`theme::Theme`])
//! are stored as TOML files and loaded at startup.

pub mod settings;
pub mod theme;
