//! Behavioural patterns: how objects distribute responsibility and communicate.

pub mod chain;
pub mod command;
pub mod interpreter;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
