//! voca-server: HTTP backend for a vocabulary learning list
//!
//! Exposes day and word CRUD endpoints over a single persisted
//! vocabulary document. Days group words; words carry a term, its
//! meaning, and a done flag that starts false.

pub mod db;
pub mod http;
pub mod models;
