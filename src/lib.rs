//! # Birthday Bot
//!
//! A Telegram bot that keeps a roster of birthdays and congratulates people
//! in a group chat.
//!
//! ## Features
//! - Add, edit, delete and list people with chat commands
//! - Custom congratulation text and greeting card photo per person
//! - Daily check at 09:00 host time, announced at most once per date
//! - Persistent storage with SQLite

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Error classification for commands and announcements
pub mod error;
/// Background services: birthday announcements and health checks
pub mod services;
/// Utility functions for dates, validation, feedback and logging
pub mod utils;
