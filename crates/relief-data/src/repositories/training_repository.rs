use relief_core::{Training, TrainingStatus};

pub struct TrainingRepository {
    trainings: Vec<Training>,
}

impl TrainingRepository {
    pub fn new(trainings: Vec<Training>) -> Self {
        Self { trainings }
    }

    pub fn all(&self) -> &[Training] {
        &self.trainings
    }

    /// Upcoming or ongoing sessions.
    pub fn scheduled(&self) -> Vec<&Training> {
        self.trainings.iter().filter(|t| t.is_scheduled()).collect()
    }

    pub fn by_status(&self, status: TrainingStatus) -> Vec<&Training> {
        self.trainings
            .iter()
            .filter(|t| t.status == status)
            .collect()
    }
}
