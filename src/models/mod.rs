//! CLI-facing models built from API payloads

pub mod display;
