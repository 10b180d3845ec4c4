// file: src/poller/mod.rs
// description: status polling module exports
// reference: internal module structure

pub mod client;
pub mod scheduler;

pub use client::{StatusClient, StatusSource};
pub use scheduler::Poller;
