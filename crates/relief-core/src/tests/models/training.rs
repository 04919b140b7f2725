use crate::{GeoPoint, Phase, Training, TrainingStatus};

use chrono::Utc;

fn training(status: TrainingStatus, capacity: u32, enrolled: u32) -> Training {
    Training {
        id: "T001".to_string(),
        title: "First Aid Basics".to_string(),
        description: "CPR and wound care".to_string(),
        phase: Phase::Before,
        location: GeoPoint::new(23.81, 90.41, "Community Center"),
        date: Utc::now(),
        duration: "3 hours".to_string(),
        capacity,
        enrolled,
        instructor: "Dr. Khan".to_string(),
        status,
        attendance_code: None,
    }
}

#[test]
fn test_training_is_scheduled() {
    assert!(training(TrainingStatus::Upcoming, 30, 0).is_scheduled());
    assert!(training(TrainingStatus::Ongoing, 30, 0).is_scheduled());
    assert!(!training(TrainingStatus::Completed, 30, 0).is_scheduled());
}

#[test]
fn test_training_seats_left() {
    assert_eq!(training(TrainingStatus::Upcoming, 30, 12).seats_left(), 18);
}

#[test]
fn test_training_seats_left_saturates() {
    // Over-enrollment can happen in seed data; never underflow.
    assert_eq!(training(TrainingStatus::Upcoming, 10, 15).seats_left(), 0);
}
