//! Configuration, record types and the category table shared by both handlers

pub mod categories;
pub mod config;
pub mod models;
