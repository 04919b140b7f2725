//! Per-role dashboard summaries: the filtering and aggregation each role
//! view performs over the relief collections, computed once per render.

pub mod admin_summary;
pub mod citizen_summary;
pub mod donor_summary;
pub mod ngo_summary;

pub use admin_summary::AdminSummary;
pub use citizen_summary::CitizenSummary;
pub use donor_summary::DonorSummary;
pub use ngo_summary::NgoSummary;

/// Regions under this training-coverage percent are flagged for follow-up.
pub const LOW_COVERAGE_THRESHOLD: u32 = 50;
