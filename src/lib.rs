pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod input;
pub mod layout;
pub mod schema;
pub mod ui;
