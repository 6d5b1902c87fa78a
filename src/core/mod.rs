// src/core/mod.rs

pub mod assets;
pub mod generator;
pub mod renderer;
