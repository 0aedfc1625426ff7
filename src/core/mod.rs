//! Core functionality: the document library, imports, and configuration

pub mod config;
pub mod document;
pub mod import;
pub mod import_task;
pub mod library;
pub mod picker;
