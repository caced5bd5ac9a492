wire_enum! {
    /// Progress of a task
    ///
    /// # Typical flow
    /// ```text
    /// Pending -> InProgress -> Completed
    ///                 └---> Blocked
    /// ```
    /// The simulator accepts any status on PATCH; the flow above is only
    /// what the dashboard expects to see.
    pub enum TaskStatus as "task status" {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        Blocked => "blocked",
    }
}

wire_enum! {
    /// How urgent a task is
    pub enum TaskPriority as "task priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Medium
    }
}

impl TaskStatus {
    /// Human label, e.g. `in progress`
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}
