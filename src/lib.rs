// src/lib.rs

pub mod config;
pub mod core;
pub mod drill;
pub mod error;
pub mod jisho;
pub mod learning;
pub mod persistence;
pub mod theme;
pub use crate::core::engine::QuizEngine;
