//! "Dev Journey": the built-in six-step development lifecycle.
//!
//! A ticket moves from "Ready for Development" to "Closed":
//! - Each step offers one true status and two traps
//! - Any trap blocks development and ends the game
//! - Clearing the last step pushes to production
//!
//! Also serves as the reference step table for tests.

mod table;

pub use table::{dev_journey_config, DevJourneyBuilder};
