//! Presentation-facing driver.
//!
//! A renderer holds one `GameSession`, draws `session.view()`, forwards
//! clicks to `choose`, and redeems advance tickets after its own delay.

mod driver;

pub use driver::GameSession;
