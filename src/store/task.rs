use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::store::errors::StoreResult;
use crate::store::{Store, find_mut, remove_by_id, required_name};

impl Store {
    pub fn create_task(&mut self, new: NewTask) -> StoreResult<Task> {
        required_name(&new.name)?;
        let task = new.into_task(Self::new_id());
        self.data.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    pub fn update_task(&mut self, id: &str, updates: UpdateTask) -> StoreResult<Task> {
        let task = find_mut(&mut self.data.tasks, id)?;
        updates.apply(task);
        let task = task.clone();
        self.persist()?;
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.data.tasks, id)?;
        self.persist()
    }

    pub fn replace_tasks(&mut self, tasks: Vec<Task>) -> StoreResult<()> {
        self.data.tasks = tasks;
        self.persist()
    }
}
