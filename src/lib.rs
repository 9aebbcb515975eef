#![recursion_limit = "256"]

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod pages;
pub mod sections;

pub use app::{App, Site};
pub use catalog::{Catalog, CategoryFilter, ProjectId, ProjectRecord, ProjectType};
