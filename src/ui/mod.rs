//! UI components for the document reader

pub mod alert;
pub mod home;
pub mod library;
