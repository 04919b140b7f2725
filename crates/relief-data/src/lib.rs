pub mod credential_directory;
pub mod error;
pub mod repositories;
pub mod seed;
pub mod user_directory;

pub use credential_directory::CredentialDirectory;
pub use error::{DataError, Result};
pub use repositories::alert_repository::AlertRepository;
pub use repositories::campaign_repository::CampaignRepository;
pub use repositories::disaster_repository::DisasterRepository;
pub use repositories::donation_repository::DonationRepository;
pub use repositories::request_repository::RequestRepository;
pub use repositories::resilience_repository::ResilienceRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::training_repository::TrainingRepository;
pub use user_directory::UserDirectory;

#[cfg(test)]
mod tests;
