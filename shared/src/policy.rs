//! Household access policy
//!
//! Role-based capability checks for the surrounding CRUD layer. Handlers
//! ask `role.can(Capability::ManageAllowances)` instead of comparing role
//! strings at every call site.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member's role within a household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Adult,
    Child,
}

/// Fine-grained actions a role may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageHousehold,
    ManageMembers,
    ManageBudgets,
    ManageAllowances,
    ManageChores,
    CompleteChores,
    LogNutrition,
    ViewNutrition,
    EditShoppingLists,
    EditNotes,
}

impl Role {
    /// The full capability set granted to this role.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Owner => &[
                Capability::ManageHousehold,
                Capability::ManageMembers,
                Capability::ManageBudgets,
                Capability::ManageAllowances,
                Capability::ManageChores,
                Capability::CompleteChores,
                Capability::LogNutrition,
                Capability::ViewNutrition,
                Capability::EditShoppingLists,
                Capability::EditNotes,
            ],
            Role::Adult => &[
                Capability::ManageBudgets,
                Capability::ManageAllowances,
                Capability::ManageChores,
                Capability::CompleteChores,
                Capability::LogNutrition,
                Capability::ViewNutrition,
                Capability::EditShoppingLists,
                Capability::EditNotes,
            ],
            Role::Child => &[
                Capability::CompleteChores,
                Capability::LogNutrition,
                Capability::ViewNutrition,
                Capability::EditShoppingLists,
            ],
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

/// A member's standing within one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub member_id: Uuid,
    pub household_id: Uuid,
    pub role: Role,
}

impl Membership {
    pub fn can(&self, capability: Capability) -> bool {
        self.role.can(capability)
    }
}
