// src/gui/components/mod.rs
pub mod chart_panel;
pub mod dashboard;
pub mod data_table;
pub mod password;
pub mod sidebar;
