use relief_core::{TaskStatus, TrainingStatus};
use relief_data::{TaskRepository, TrainingRepository};

use serde::Serialize;

/// Workload counters for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NgoSummary {
    pub scheduled_trainings: usize,
    pub completed_trainings: usize,
    pub open_tasks: usize,
    pub completed_tasks: usize,
}

impl NgoSummary {
    pub fn compute(
        organization_id: &str,
        trainings: &TrainingRepository,
        tasks: &TaskRepository,
    ) -> Self {
        let org_tasks = tasks.for_organization(organization_id);
        Self {
            scheduled_trainings: trainings.scheduled().len(),
            completed_trainings: trainings.by_status(TrainingStatus::Completed).len(),
            open_tasks: org_tasks.iter().filter(|t| t.is_open()).count(),
            completed_tasks: org_tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count(),
        }
    }
}
