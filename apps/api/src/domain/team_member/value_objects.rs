wire_enum! {
    /// Availability of a team member
    pub enum MemberStatus as "member status" {
        Active => "active",
        Inactive => "inactive",
        Away => "away",
    }
}

impl MemberStatus {
    /// Capitalized label, e.g. `Away`
    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
            MemberStatus::Away => "Away",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_capitalized() {
        assert_eq!(MemberStatus::Active.label(), "Active");
        assert_eq!(MemberStatus::Away.label(), "Away");
        assert_eq!(MemberStatus::Inactive.label(), "Inactive");
    }

    #[test]
    fn parse_wire_strings() {
        assert_eq!("away".parse::<MemberStatus>(), Ok(MemberStatus::Away));
        assert!("Away".parse::<MemberStatus>().is_err());
    }
}
