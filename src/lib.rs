// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;

pub mod error;
pub mod file;
pub mod gui;
pub mod load;
pub mod progress;
pub mod render;
pub mod store;
