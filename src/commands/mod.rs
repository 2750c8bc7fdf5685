//! Command handlers.

pub mod ask;
