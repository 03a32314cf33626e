//! Build-time Configuration
//!
//! Values baked in at compile time via environment variables, plus the
//! static constants the views share.

use log::LevelFilter;

/// Category tabs, in display order
pub const CATEGORIES: &[&str] = &["Shooter", "RPG", "Indie", "Noticias", "Retro", "Tecnología"];

/// Tab selected when the listing opens
pub const DEFAULT_CATEGORY: &str = "Shooter";

/// Number of categories shown under "Tendencias"
pub const TRENDING_SIZE: usize = 3;

/// Leading cache entries eligible for "Más Populares"
pub const POPULAR_WINDOW: usize = 5;

pub const DESCRIPTION_MAX_LEN: usize = 255;
pub const COMMENT_MAX_LEN: usize = 500;

/// How long a notice banner stays up
pub const NOTICE_MILLIS: u32 = 3_000;

/// Author fields used when no session is present
pub const ANONYMOUS_NAME: &str = "Anonimo";
pub const ANONYMOUS_ID: u32 = 0;

/// Base URL joined in front of every API path (empty = same origin)
pub fn api_base() -> &'static str {
    option_env!("PIXELHUB_API_BASE").unwrap_or("")
}

/// Console log level
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("PIXELHUB_LOG").unwrap_or("info"))
}

fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}
