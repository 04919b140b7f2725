//! Static seed data: the four demo accounts with their credentials, plus
//! the relief-domain collections the dashboards render.
//!
//! All of this is mock data by design. Passwords are plaintext and the
//! transaction hashes are display labels, not chain references.

use chrono::{DateTime, TimeZone, Utc};
use relief_core::{
    AidRequest, Alert, AlertKind, Campaign, CampaignStatus, CredentialEntry, Disaster,
    DisasterStatus, Donation, GeoPoint, ImpactProof, Phase, RequestKind, RequestStatus,
    ResilienceRecord, Role, Severity, Task, TaskStatus, Training, TrainingStatus, User,
};

fn date(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    // Seed constants are always in range; fall back to the epoch rather
    // than panic if one ever is not.
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn users() -> Vec<User> {
    vec![
        User::new(
            "ADM001".to_string(),
            "Aisha Rahman".to_string(),
            "admin@example.com".to_string(),
            "+1-555-0101".to_string(),
            Role::Admin,
            Some("ADM001".to_string()),
        ),
        User::new(
            "DON001".to_string(),
            "David Okafor".to_string(),
            "donor@example.com".to_string(),
            "+1-555-0102".to_string(),
            Role::Donor,
            None,
        ),
        User::new(
            "NGO001".to_string(),
            "Maya Chen".to_string(),
            "ngo@example.com".to_string(),
            "+1-555-0103".to_string(),
            Role::Ngo,
            Some("NGO001".to_string()),
        ),
        User::new(
            "CIT001".to_string(),
            "Carlos Rivera".to_string(),
            "citizen@example.com".to_string(),
            "+1-555-0104".to_string(),
            Role::Citizen,
            None,
        ),
    ]
}

pub fn credentials() -> Vec<CredentialEntry> {
    vec![
        CredentialEntry::with_supplementary_id("admin@example.com", "Pass123", "ADM001"),
        CredentialEntry::new("donor@example.com", "Pass123"),
        CredentialEntry::with_supplementary_id("ngo@example.com", "Pass123", "NGO001"),
        CredentialEntry::new("citizen@example.com", "Pass123"),
    ]
}

pub fn disasters() -> Vec<Disaster> {
    vec![
        Disaster {
            id: "DIS001".to_string(),
            name: "Riverside Flood".to_string(),
            kind: "flood".to_string(),
            severity: Severity::High,
            location: GeoPoint::new(23.8103, 90.4125, "Riverside District"),
            status: DisasterStatus::Active,
            start_date: date(2026, 7, 2, 6),
            affected_population: 45_000,
            risk_score: 82.5,
        },
        Disaster {
            id: "DIS002".to_string(),
            name: "Coastal Cyclone Watch".to_string(),
            kind: "cyclone".to_string(),
            severity: Severity::Critical,
            location: GeoPoint::new(21.4272, 92.0058, "Coastal Belt"),
            status: DisasterStatus::Predicted,
            start_date: date(2026, 9, 15, 0),
            affected_population: 120_000,
            risk_score: 91.0,
        },
        Disaster {
            id: "DIS003".to_string(),
            name: "Hillside Landslide".to_string(),
            kind: "landslide".to_string(),
            severity: Severity::Medium,
            location: GeoPoint::new(22.3569, 91.7832, "Hill Tracts"),
            status: DisasterStatus::Recovery,
            start_date: date(2026, 5, 20, 14),
            affected_population: 8_000,
            risk_score: 44.0,
        },
    ]
}

pub fn trainings() -> Vec<Training> {
    vec![
        Training {
            id: "TRN001".to_string(),
            title: "First Aid Basics".to_string(),
            description: "CPR, wound care and triage for neighborhood volunteers".to_string(),
            phase: Phase::Before,
            location: GeoPoint::new(23.7806, 90.2794, "Community Center"),
            date: date(2026, 9, 10, 9),
            duration: "3 hours".to_string(),
            capacity: 40,
            enrolled: 28,
            instructor: "Dr. Khan".to_string(),
            status: TrainingStatus::Upcoming,
            attendance_code: None,
        },
        Training {
            id: "TRN002".to_string(),
            title: "Flood Evacuation Drill".to_string(),
            description: "Route walkthrough and boat loading practice".to_string(),
            phase: Phase::During,
            location: GeoPoint::new(23.8103, 90.4125, "Riverside School"),
            date: date(2026, 8, 28, 8),
            duration: "Half day".to_string(),
            capacity: 60,
            enrolled: 60,
            instructor: "Lt. Barua".to_string(),
            status: TrainingStatus::Ongoing,
            attendance_code: Some("FLD-228".to_string()),
        },
        Training {
            id: "TRN003".to_string(),
            title: "Shelter Management".to_string(),
            description: "Registration, supplies and sanitation in temporary shelters".to_string(),
            phase: Phase::After,
            location: GeoPoint::new(22.3569, 91.7832, "District Office"),
            date: date(2026, 6, 5, 10),
            duration: "2 days".to_string(),
            capacity: 25,
            enrolled: 22,
            instructor: "S. Ahmed".to_string(),
            status: TrainingStatus::Completed,
            attendance_code: Some("SHL-605".to_string()),
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "CMP001".to_string(),
            title: "Riverside Flood Relief".to_string(),
            description: "Food, drinking water and medicine for flooded wards".to_string(),
            phase: Phase::During,
            target_amount: 50_000,
            raised_amount: 32_500,
            location: "Riverside District".to_string(),
            start_date: date(2026, 7, 3, 0),
            end_date: date(2026, 10, 1, 0),
            status: CampaignStatus::Active,
            approved: true,
            category: "emergency".to_string(),
            urgency: Severity::Critical,
        },
        Campaign {
            id: "CMP002".to_string(),
            title: "Cyclone Shelter Retrofit".to_string(),
            description: "Reinforce six coastal shelters before the season peaks".to_string(),
            phase: Phase::Before,
            target_amount: 80_000,
            raised_amount: 12_000,
            location: "Coastal Belt".to_string(),
            start_date: date(2026, 8, 1, 0),
            end_date: date(2026, 11, 30, 0),
            status: CampaignStatus::Active,
            approved: true,
            category: "infrastructure".to_string(),
            urgency: Severity::High,
        },
        Campaign {
            id: "CMP003".to_string(),
            title: "Hill Tracts Rebuild".to_string(),
            description: "Housing grants for landslide-affected families".to_string(),
            phase: Phase::After,
            target_amount: 120_000,
            raised_amount: 0,
            location: "Hill Tracts".to_string(),
            start_date: date(2026, 9, 1, 0),
            end_date: date(2027, 3, 1, 0),
            status: CampaignStatus::Pending,
            approved: false,
            category: "recovery".to_string(),
            urgency: Severity::Medium,
        },
    ]
}

pub fn donations() -> Vec<Donation> {
    vec![
        Donation {
            id: "DNT001".to_string(),
            campaign_id: "CMP001".to_string(),
            donor_id: "DON001".to_string(),
            amount: 500,
            date: date(2026, 7, 10, 12),
            transaction_hash: "0x3fa1c".to_string(),
            impact_proof: Some(ImpactProof {
                photos: vec!["relief-drop-01.jpg".to_string()],
                description: "Water purification kits for 40 households".to_string(),
                beneficiaries: 160,
            }),
        },
        Donation {
            id: "DNT002".to_string(),
            campaign_id: "CMP002".to_string(),
            donor_id: "DON001".to_string(),
            amount: 250,
            date: date(2026, 8, 5, 16),
            transaction_hash: "0x9b27e".to_string(),
            impact_proof: None,
        },
        Donation {
            id: "DNT003".to_string(),
            campaign_id: "CMP001".to_string(),
            donor_id: "DON014".to_string(),
            amount: 1_000,
            date: date(2026, 7, 22, 9),
            transaction_hash: "0x51d08".to_string(),
            impact_proof: Some(ImpactProof {
                photos: vec!["kitchen-01.jpg".to_string(), "kitchen-02.jpg".to_string()],
                description: "Community kitchen meals for one week".to_string(),
                beneficiaries: 420,
            }),
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "TSK001".to_string(),
            title: "Distribute water kits".to_string(),
            description: "Ward 4 and 5, prioritize households with children".to_string(),
            phase: Phase::During,
            assigned_to: "NGO001".to_string(),
            priority: Severity::Critical,
            status: TaskStatus::InProgress,
            due_date: date(2026, 8, 31, 18),
            location: "Riverside District".to_string(),
            ai_generated: true,
        },
        Task {
            id: "TSK002".to_string(),
            title: "Verify shelter stock".to_string(),
            description: "Count tarpaulins and dry rations at shelter 3".to_string(),
            phase: Phase::Before,
            assigned_to: "NGO001".to_string(),
            priority: Severity::Medium,
            status: TaskStatus::Pending,
            due_date: date(2026, 9, 8, 12),
            location: "Coastal Belt".to_string(),
            ai_generated: false,
        },
        Task {
            id: "TSK003".to_string(),
            title: "File landslide assessment".to_string(),
            description: "Photo survey of retaining walls, blocks A-C".to_string(),
            phase: Phase::After,
            assigned_to: "NGO002".to_string(),
            priority: Severity::Low,
            status: TaskStatus::Completed,
            due_date: date(2026, 6, 15, 17),
            location: "Hill Tracts".to_string(),
            ai_generated: true,
        },
    ]
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "ALT001".to_string(),
            title: "River level rising".to_string(),
            message: "Expected to cross danger mark within 24 hours".to_string(),
            kind: AlertKind::Danger,
            severity: Severity::Critical,
            location: "Riverside District".to_string(),
            timestamp: date(2026, 8, 29, 5),
            ai_predicted: true,
        },
        Alert {
            id: "ALT002".to_string(),
            title: "Cyclone formation likely".to_string(),
            message: "Depression in the bay may intensify this week".to_string(),
            kind: AlertKind::Warning,
            severity: Severity::High,
            location: "Coastal Belt".to_string(),
            timestamp: date(2026, 8, 27, 11),
            ai_predicted: true,
        },
        Alert {
            id: "ALT003".to_string(),
            title: "Relief camp opened".to_string(),
            message: "Shelter 3 now accepting families from ward 4".to_string(),
            kind: AlertKind::Info,
            severity: Severity::Low,
            location: "Riverside District".to_string(),
            timestamp: date(2026, 8, 26, 15),
            ai_predicted: false,
        },
    ]
}

pub fn requests() -> Vec<AidRequest> {
    vec![
        AidRequest {
            id: "REQ001".to_string(),
            citizen_id: "CIT001".to_string(),
            kind: RequestKind::Food,
            description: "Family of five, cut off since Tuesday".to_string(),
            location: GeoPoint::new(23.8121, 90.4201, "Ward 4, Riverside"),
            status: RequestStatus::Pending,
            priority: Severity::High,
            timestamp: date(2026, 8, 28, 7),
            assigned_to: None,
        },
        AidRequest {
            id: "REQ002".to_string(),
            citizen_id: "CIT017".to_string(),
            kind: RequestKind::Medicine,
            description: "Insulin needed for elderly resident".to_string(),
            location: GeoPoint::new(23.8090, 90.4150, "Ward 5, Riverside"),
            status: RequestStatus::InProgress,
            priority: Severity::Critical,
            timestamp: date(2026, 8, 28, 9),
            assigned_to: Some("NGO001".to_string()),
        },
        AidRequest {
            id: "REQ003".to_string(),
            citizen_id: "CIT001".to_string(),
            kind: RequestKind::Shelter,
            description: "Roof damage, need tarpaulin".to_string(),
            location: GeoPoint::new(23.8121, 90.4201, "Ward 4, Riverside"),
            status: RequestStatus::Fulfilled,
            priority: Severity::Medium,
            timestamp: date(2026, 7, 9, 13),
            assigned_to: Some("NGO001".to_string()),
        },
    ]
}

pub fn resilience() -> Vec<ResilienceRecord> {
    vec![
        ResilienceRecord {
            location: "Riverside District".to_string(),
            score: 58,
            training_coverage: 42,
            readiness_score: 55,
            vulnerability_index: 71,
            population: 250_000,
            trained_population: 105_000,
        },
        ResilienceRecord {
            location: "Coastal Belt".to_string(),
            score: 64,
            training_coverage: 61,
            readiness_score: 67,
            vulnerability_index: 80,
            population: 410_000,
            trained_population: 250_100,
        },
        ResilienceRecord {
            location: "Hill Tracts".to_string(),
            score: 47,
            training_coverage: 35,
            readiness_score: 49,
            vulnerability_index: 66,
            population: 90_000,
            trained_population: 31_500,
        },
    ]
}
