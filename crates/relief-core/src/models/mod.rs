pub mod aid_request;
pub mod alert;
pub mod alert_kind;
pub mod campaign;
pub mod campaign_status;
pub mod credential_entry;
pub mod disaster;
pub mod disaster_status;
pub mod donation;
pub mod geo_point;
pub mod phase;
pub mod request_kind;
pub mod request_status;
pub mod resilience_record;
pub mod role;
pub mod session_record;
pub mod severity;
pub mod task;
pub mod task_status;
pub mod training;
pub mod training_status;
pub mod user;
