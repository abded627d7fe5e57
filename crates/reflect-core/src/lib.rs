//! Core library for the emotion reflection tool (config, analysis client, themes).

pub mod analysis;
pub mod config;
pub mod logging;
pub mod reflection;
pub mod theme;
