use serde::{Deserialize, Serialize};

use crate::domain::HasId;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Default assignee label for tasks nobody has claimed yet.
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub priority: Priority,
    pub assigned_to: String,
    pub completed: bool,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            priority: Priority::default(),
            assigned_to: UNASSIGNED.to_string(),
            completed: false,
        }
    }
}

impl HasId for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewTask {
    pub name: String,
    pub priority: Priority,
    pub assigned_to: Option<String>,
    pub completed: bool,
}

impl NewTask {
    pub fn into_task(self, id: String) -> Task {
        let assigned_to = self
            .assigned_to
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNASSIGNED.to_string());
        Task {
            id,
            name: self.name.trim().to_string(),
            priority: self.priority,
            assigned_to,
            completed: self.completed,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTask {
    pub name: Option<String>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTask {
    pub fn apply(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name.trim().to_string();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            let assigned_to = assigned_to.trim();
            task.assigned_to = if assigned_to.is_empty() {
                UNASSIGNED.to_string()
            } else {
                assigned_to.to_string()
            };
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_assignee_becomes_unassigned() {
        let task = NewTask {
            name: "Book Qari Sahab".into(),
            assigned_to: Some("   ".into()),
            ..Default::default()
        }
        .into_task("t1".into());
        assert_eq!(task.assigned_to, UNASSIGNED);
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
    }
}
