//! Configuration module for budgetbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetbookPaths;
pub use settings::Settings;
