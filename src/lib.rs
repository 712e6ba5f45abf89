//! Mock backend for Studi, an AI-powered learning assistant.
//!
//! Every route handler serves hard-coded or in-memory data: a bearer-token
//! identity gate, per-user profiles, a static documentation catalog, and a
//! simulated agent system with a real-time WebSocket channel.

pub mod agent;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod profile;
pub mod types;
