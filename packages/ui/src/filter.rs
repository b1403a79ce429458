use api::Task;

/// Which tasks the dashboard list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Tab order.
    pub const TABS: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.is_completed,
            TaskFilter::Completed => task.is_completed,
        }
    }

    pub fn apply(self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, done: bool) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            is_completed: done,
            created_at: String::new(),
            user_id: String::new(),
        }
    }

    #[test]
    fn test_filters_partition_list() {
        let tasks = vec![task(1, false), task(2, true), task(3, false)];

        let ids = |f: TaskFilter| f.apply(&tasks).iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(TaskFilter::All), vec![1, 2, 3]);
        assert_eq!(ids(TaskFilter::Active), vec![1, 3]);
        assert_eq!(ids(TaskFilter::Completed), vec![2]);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
        assert_eq!(TaskFilter::TABS[0].label(), "All");
    }
}
