use relief_core::{Task, TaskStatus};

pub struct TaskRepository {
    tasks: Vec<Task>,
}

impl TaskRepository {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn for_organization(&self, organization_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.assigned_to == organization_id)
            .collect()
    }

    pub fn open_for_organization(&self, organization_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.assigned_to == organization_id && t.is_open())
            .collect()
    }
}
