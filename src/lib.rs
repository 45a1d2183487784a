// src/lib.rs

pub mod backend;
pub mod constants;
pub mod errors;
pub mod models;
pub mod power;
pub mod utils;
