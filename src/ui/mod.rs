// src/ui/mod.rs
pub mod uploader;
pub mod results;
