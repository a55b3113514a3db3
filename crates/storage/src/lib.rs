#![forbid(unsafe_code)]

pub mod export;
pub mod repository;
