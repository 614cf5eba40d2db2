//! Main module for cardmark library functionality

pub mod ast;
pub mod carousel;
pub mod citations;
pub mod classifier;
pub mod config;
pub mod processor;
pub mod sections;
pub mod testing;
pub mod triggers;
