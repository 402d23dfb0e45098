use serde::{Deserialize, Serialize};

/// Coarse access tier controlling which pages and navigation a user sees.
///
/// - `SuperAdmin`: platform operator. Sees every auction plus the category and brand pages.
/// - `PawnshopOwner`: seller. Sees their own listings and the add-product form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    PawnshopOwner,
}

/// All roles in sign-in selector order.
pub const ALL_ROLES: &[Role] = &[Role::SuperAdmin, Role::PawnshopOwner];

impl Role {
    /// Parse a stored role key. Unknown keys yield `None`; there is no fallback role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "super_admin" => Some(Role::SuperAdmin),
            "pawnshop_owner" => Some(Role::PawnshopOwner),
            _ => None,
        }
    }

    /// Key used in the persisted session record and in form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::PawnshopOwner => "pawnshop_owner",
        }
    }

    /// Human-readable label for the sidebar user card and selectors.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::PawnshopOwner => "Pawnshop Owner",
        }
    }
}

/// The signed-in user. Serialized as-is into local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Single uppercase initial for the avatar fallback.
    pub fn initials(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}
