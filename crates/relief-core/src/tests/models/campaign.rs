use crate::{Campaign, CampaignStatus, Phase, Severity};

use chrono::Utc;

fn campaign(target: u64, raised: u64, status: CampaignStatus, approved: bool) -> Campaign {
    Campaign {
        id: "C001".to_string(),
        title: "Flood Relief".to_string(),
        description: "Emergency supplies".to_string(),
        phase: Phase::During,
        target_amount: target,
        raised_amount: raised,
        location: "Riverside District".to_string(),
        start_date: Utc::now(),
        end_date: Utc::now(),
        status,
        approved,
        category: "emergency".to_string(),
        urgency: Severity::High,
    }
}

#[test]
fn test_campaign_progress() {
    let c = campaign(10_000, 2_500, CampaignStatus::Active, true);
    assert_eq!(c.progress(), 0.25);
}

#[test]
fn test_campaign_progress_caps_at_one() {
    let c = campaign(1_000, 5_000, CampaignStatus::Active, true);
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn test_campaign_progress_zero_target() {
    let c = campaign(0, 500, CampaignStatus::Active, true);
    assert_eq!(c.progress(), 0.0);
}

#[test]
fn test_campaign_pending_approval() {
    assert!(campaign(1, 0, CampaignStatus::Pending, false).is_pending_approval());
    assert!(!campaign(1, 0, CampaignStatus::Active, true).is_pending_approval());
}

#[test]
fn test_campaign_is_active() {
    assert!(campaign(1, 0, CampaignStatus::Active, true).is_active());
    assert!(!campaign(1, 0, CampaignStatus::Completed, true).is_active());
}
