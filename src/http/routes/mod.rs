//! Route handlers for the vocabulary API
//!
//! Organized by resource type:
//! - days: Numbered day groups (list, filter, create)
//! - words: Vocabulary entries (list, filter, create, delete)
//! - health: Health check endpoint

pub mod days;
pub mod health;
pub mod words;
