//! Pure role-based access decisions. No storage access; callers resolve the
//! actor row first and pass its role/team ids in.

/// Privilege tier a role id maps to. The ids themselves come from
/// configuration so a renumbered roles table only changes the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Hr,
    TechLead,
    Manager,
    Staff,
}

/// Which teams an actor may see on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamScope {
    AllTeams,
    Team(i64),
}

#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    hr_role_id: i64,
    tech_lead_role_id: i64,
    manager_role_id: i64,
}

impl AccessPolicy {
    pub fn new(hr_role_id: i64, tech_lead_role_id: i64, manager_role_id: i64) -> Self {
        Self {
            hr_role_id,
            tech_lead_role_id,
            manager_role_id,
        }
    }

    pub fn classify(&self, role_id: i64) -> RoleKind {
        if role_id == self.hr_role_id {
            RoleKind::Hr
        } else if role_id == self.tech_lead_role_id {
            RoleKind::TechLead
        } else if role_id == self.manager_role_id {
            RoleKind::Manager
        } else {
            RoleKind::Staff
        }
    }

    /// Raw (or anonymized) check-in history is HR-only.
    pub fn can_view_raw_history(&self, role_id: i64) -> bool {
        self.classify(role_id) == RoleKind::Hr
    }

    /// The aggregate dashboard is open to HR and both manager tiers.
    pub fn can_view_dashboard(&self, role_id: i64) -> bool {
        matches!(
            self.classify(role_id),
            RoleKind::Hr | RoleKind::TechLead | RoleKind::Manager
        )
    }

    /// Only HR may create employee records.
    pub fn can_register_employee(&self, role_id: i64) -> bool {
        self.classify(role_id) == RoleKind::Hr
    }

    /// HR sees every team; a manager tier sees only its own. `None` means
    /// the role has no dashboard visibility at all.
    pub fn visible_team_scope(&self, role_id: i64, team_id: i64) -> Option<TeamScope> {
        match self.classify(role_id) {
            RoleKind::Hr => Some(TeamScope::AllTeams),
            RoleKind::TechLead | RoleKind::Manager => Some(TeamScope::Team(team_id)),
            RoleKind::Staff => None,
        }
    }
}
