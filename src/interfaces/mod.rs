//! Adapters that feed operations into the application layer.

pub mod csv;
