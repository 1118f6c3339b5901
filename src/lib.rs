//! # Group Schedule Bot
//!
//! A Telegram bot that shows a student group's weekly class schedule and
//! pages through weeks with inline buttons.
//!
//! ## Features
//! - Fuzzy lookup of group names typed by users, with a yes/no confirmation
//! - Week-by-week navigation without server-side sessions: every button
//!   carries its own compact token
//! - Stable, mobile-friendly schedule layout in Russian or English
//! - Persistent storage with SQLite

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Error types shared by the schedule core
pub mod error;
/// Navigation tokens, group search, week rendering and their controller
pub mod schedule;
/// Background services like the health endpoint
pub mod services;
/// Utility functions for markup and logging
pub mod utils;
