// src/services/mod.rs
pub mod assistant;
pub mod gemini;
pub mod generator;
pub mod prompt;
