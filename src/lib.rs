//! Terminal gallery viewer: one page per image, a synced tab bar, and
//! keyboard or mouse paging with wraparound.
pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod gallery;
pub mod input;
pub mod logging;
pub mod navigation;
pub mod runtime;
pub mod theme;
pub mod ui;
