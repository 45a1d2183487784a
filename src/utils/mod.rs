// src/utils/mod.rs

pub mod windows;
