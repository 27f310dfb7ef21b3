//! The three-tier role model.
//!
//! Roles form a total order used for minimum-role checks. `SuperAdmin` is
//! the platform tier: it administers every hotel and is the only role
//! with no hotel binding. `Admin` and `Manager` are pinned to exactly one
//! hotel and differ only in rank.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Manager];

    /// Position in the role hierarchy; higher outranks lower.
    pub fn hierarchy_rank(&self) -> u8 {
        match self {
            Role::SuperAdmin => 3,
            Role::Admin => 2,
            Role::Manager => 1,
        }
    }

    /// `true` if this role is at least `min` in the hierarchy.
    pub fn meets_minimum(&self, min: Role) -> bool {
        self.hierarchy_rank() >= min.hierarchy_rank()
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    /// Human-readable label for dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Manager => "Manager",
        }
    }

    /// Wire name (matches the serde representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meets_minimum_is_reflexive() {
        for role in Role::ALL {
            assert!(role.meets_minimum(role));
        }
    }

    #[test]
    fn meets_minimum_is_transitive_and_antisymmetric() {
        for a in Role::ALL {
            for b in Role::ALL {
                for c in Role::ALL {
                    if a.meets_minimum(b) && b.meets_minimum(c) {
                        assert!(a.meets_minimum(c), "{a} >= {b} >= {c}");
                    }
                }
                if a.meets_minimum(b) && b.meets_minimum(a) {
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn hierarchy_order() {
        assert!(Role::SuperAdmin.meets_minimum(Role::Admin));
        assert!(Role::Admin.meets_minimum(Role::Manager));
        assert!(!Role::Manager.meets_minimum(Role::Admin));
        assert!(!Role::Admin.meets_minimum(Role::SuperAdmin));
    }

    #[test]
    fn wire_names_round_trip() {
        for role in Role::ALL {
            let s = serde_json::to_string(&role).unwrap();
            assert_eq!(s, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&s).unwrap();
            assert_eq!(back, role);
        }
    }
}
