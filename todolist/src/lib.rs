//! `todolist`: terminal todo list library.

pub mod app;
pub mod config;
pub mod input;
pub mod ui;
