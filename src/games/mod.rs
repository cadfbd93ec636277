//! Built-in step tables.

pub mod dev_journey;
