pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::aid_request::AidRequest;
pub use models::alert::Alert;
pub use models::alert_kind::AlertKind;
pub use models::campaign::Campaign;
pub use models::campaign_status::CampaignStatus;
pub use models::credential_entry::CredentialEntry;
pub use models::disaster::Disaster;
pub use models::disaster_status::DisasterStatus;
pub use models::donation::{Donation, ImpactProof};
pub use models::geo_point::GeoPoint;
pub use models::phase::Phase;
pub use models::request_kind::RequestKind;
pub use models::request_status::RequestStatus;
pub use models::resilience_record::ResilienceRecord;
pub use models::role::Role;
pub use models::session_record::SessionRecord;
pub use models::severity::Severity;
pub use models::task::Task;
pub use models::task_status::TaskStatus;
pub use models::training::Training;
pub use models::training_status::TrainingStatus;
pub use models::user::User;

#[cfg(test)]
mod tests;
