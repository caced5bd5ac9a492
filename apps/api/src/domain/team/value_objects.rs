wire_enum! {
    /// Whether a team is currently staffed and working
    pub enum TeamStatus as "team status" {
        /// Team is taking on work
        Active => "active",
        /// Team is parked
        Inactive => "inactive",
    }
}

impl Default for TeamStatus {
    fn default() -> Self {
        TeamStatus::Active
    }
}
