//! Request and response records for the calculation engine.
//!
//! Everything here is plain owned data with `serde` derives so any
//! transport (in-process call, RPC, HTTP handler) can carry it. The engine
//! never persists these records; lifecycle is one calculation request.

mod annulus;
mod displacement;
mod kill_sheet;
mod pump;
mod string;

pub use annulus::{AnnularVolumeReport, AnnularVolumeTotals, AnnulusSection, SectionVolume};
pub use displacement::{DisplacementInputs, DisplacementSnapshot, FluidFront, LegProgress};
pub use kill_sheet::{KickIntensity, KillSheetInputs, KillSheetReport, PressureStep};
pub use pump::{PumpOutputReport, PumpRateRow, PumpSpec, PumpType};
pub use string::{ComponentVolume, PipeComponent, StringVolumeReport, StringVolumeTotals};
