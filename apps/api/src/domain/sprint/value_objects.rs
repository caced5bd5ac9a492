wire_enum! {
    /// Lifecycle of a sprint
    pub enum SprintStatus as "sprint status" {
        Planning => "planning",
        Active => "active",
        Completed => "completed",
    }
}
