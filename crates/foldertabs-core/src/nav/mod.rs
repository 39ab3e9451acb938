//! Navigation logic for FolderTabs.
//!
//! This module contains the [`tabs::FolderTabs`] state manager, per-tab
//! back [`history::History`], [`favorites::Favorites`], search and type
//! [`filter`]ing, and the rendered [`view::FolderView`] of a folder.

pub mod favorites;
pub mod filter;
pub mod history;
pub mod tabs;
pub mod view;
