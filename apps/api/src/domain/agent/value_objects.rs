wire_enum! {
    /// Specialization of a simulated agent
    pub enum AgentRole as "agent role" {
        Researcher => "researcher",
        Architect => "architect",
        Engineer => "engineer",
        Tester => "tester",
    }
}

wire_enum! {
    /// What an agent is doing right now
    ///
    /// The simulator does not enforce transitions; a PATCH may set any
    /// status at any time.
    pub enum AgentStatus as "agent status" {
        /// Working on its current task
        Thinking => "thinking",
        /// Waiting for work
        Idle => "idle",
        /// Stopped on a failure
        Error => "error",
    }
}
