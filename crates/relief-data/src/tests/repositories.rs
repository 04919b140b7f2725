use crate::{
    AlertRepository, CampaignRepository, DisasterRepository, DonationRepository,
    RequestRepository, ResilienceRepository, TaskRepository, TrainingRepository, seed,
};

use relief_core::{RequestStatus, Severity, TaskStatus, TrainingStatus};

#[test]
fn test_disaster_active_filter() {
    let repo = DisasterRepository::new(seed::disasters());

    let active = repo.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "DIS001");
}

#[test]
fn test_disaster_headline_clamps_to_len() {
    let repo = DisasterRepository::new(seed::disasters());

    assert_eq!(repo.headline(3).len(), 3);
    assert_eq!(repo.headline(10).len(), 3);
    assert_eq!(repo.headline(0).len(), 0);
}

#[test]
fn test_training_scheduled_counts_upcoming_and_ongoing() {
    let repo = TrainingRepository::new(seed::trainings());

    assert_eq!(repo.scheduled().len(), 2);
    assert_eq!(repo.by_status(TrainingStatus::Completed).len(), 1);
}

#[test]
fn test_campaign_queries() {
    let repo = CampaignRepository::new(seed::campaigns());

    assert_eq!(repo.active().len(), 2);
    assert_eq!(repo.pending_approval().len(), 1);
    assert_eq!(repo.approved_active().len(), 2);
    assert_eq!(repo.total_raised(), 44_500);
    assert_eq!(repo.total_target(), 250_000);
    assert!(repo.find_by_id("CMP002").is_some());
    assert!(repo.find_by_id("CMP999").is_none());
}

#[test]
fn test_donation_aggregates_per_donor() {
    let repo = DonationRepository::new(seed::donations());

    assert_eq!(repo.by_donor("DON001").len(), 2);
    assert_eq!(repo.total_amount_for("DON001"), 750);
    assert_eq!(repo.beneficiaries_for("DON001"), 160);
    assert_eq!(repo.proven_count_for("DON001"), 1);
    assert_eq!(repo.total_amount(), 1_750);
}

#[test]
fn test_donation_unknown_donor_sums_to_zero() {
    let repo = DonationRepository::new(seed::donations());

    assert!(repo.by_donor("DON404").is_empty());
    assert_eq!(repo.total_amount_for("DON404"), 0);
    assert_eq!(repo.beneficiaries_for("DON404"), 0);
}

#[test]
fn test_task_queries_by_org_and_status() {
    let repo = TaskRepository::new(seed::tasks());

    assert_eq!(repo.for_organization("NGO001").len(), 2);
    assert_eq!(repo.open_for_organization("NGO001").len(), 2);
    assert_eq!(repo.by_status(TaskStatus::Completed).len(), 1);
}

#[test]
fn test_alert_urgent_excludes_info_and_success() {
    let repo = AlertRepository::new(seed::alerts());

    let urgent = repo.urgent();
    assert_eq!(urgent.len(), 2);
    assert!(urgent.iter().all(|a| a.is_urgent()));
}

#[test]
fn test_alert_at_least_severity() {
    let repo = AlertRepository::new(seed::alerts());

    assert_eq!(repo.at_least(Severity::High).len(), 2);
    assert_eq!(repo.at_least(Severity::Critical).len(), 1);
}

#[test]
fn test_request_queries() {
    let repo = RequestRepository::new(seed::requests());

    assert_eq!(repo.by_status(RequestStatus::Pending).len(), 1);
    assert_eq!(repo.by_citizen("CIT001").len(), 2);
    // The fulfilled request no longer counts as open.
    assert_eq!(repo.open_for_citizen("CIT001").len(), 1);
}

#[test]
fn test_resilience_under_covered() {
    let repo = ResilienceRepository::new(seed::resilience());

    let flagged = repo.under_covered(50);
    assert_eq!(flagged.len(), 2);
    assert!(flagged.iter().all(|r| r.training_coverage < 50));
}
