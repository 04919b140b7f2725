pub mod alert_repository;
pub mod campaign_repository;
pub mod disaster_repository;
pub mod donation_repository;
pub mod request_repository;
pub mod resilience_repository;
pub mod task_repository;
pub mod training_repository;
