// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod aggregate;
pub mod catalog;
pub mod csv;
pub mod file;
pub mod filter;
pub mod gate;
pub mod gui;
pub mod net;
pub mod record;
pub mod store;
