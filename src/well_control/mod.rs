//! Well control: kill-sheet arithmetic and displacement tracking.
//!
//! The kill sheet is a fixed chain of driller's-method formulas: each step
//! consumes only the raw inputs and prior steps, with no iteration and no
//! solver.
//! Displacement tracking is a pure function of the advancing stroke count
//! against the static well volumes.

pub mod displacement;
pub mod kill_sheet;

pub use displacement::track_displacement;
pub use kill_sheet::{calculate_kill_sheet, classify_kick_intensity};
