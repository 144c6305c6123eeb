pub mod advisory;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod issue;
pub mod opener;
pub mod plugin;
pub mod probe;
pub mod proxy;
pub mod render;
