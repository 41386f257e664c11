//! Flipdeck: a timed flashcard review engine with SQLite-backed
//! storage for cards and card groups.

pub mod config;
pub mod db;
pub mod domain;
pub mod editor;
pub mod review;

#[cfg(test)]
pub mod testing;
