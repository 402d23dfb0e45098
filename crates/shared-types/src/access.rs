use crate::models::{Role, User};

/// Requirement a route places on the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Role(Role),
}

/// Outcome of checking a session against a route requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    SignInRequired,
    Denied { message: &'static str },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Pure predicate: may `user` view something guarded by `required`?
pub fn can_access(user: Option<&User>, required: &Access) -> bool {
    match required {
        Access::Public => true,
        Access::Authenticated => user.is_some(),
        Access::Role(role) => user.is_some_and(|u| u.role == *role),
    }
}

/// Placeholder text for a signed-in user holding the wrong role.
pub fn denied_message(required: Role) -> &'static str {
    match required {
        Role::SuperAdmin => "This page is only accessible to Super Admins.",
        Role::PawnshopOwner => "This page is only accessible to Pawnshop Owners.",
    }
}

pub fn evaluate(user: Option<&User>, required: &Access) -> AccessDecision {
    if can_access(user, required) {
        return AccessDecision::Allow;
    }
    match (user, required) {
        (Some(_), Access::Role(role)) => AccessDecision::Denied {
            message: denied_message(*role),
        },
        _ => AccessDecision::SignInRequired,
    }
}

/// One row of the route guard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    pub path: &'static str,
    pub access: Access,
}

const fn guard(path: &'static str, access: Access) -> RouteGuard {
    RouteGuard { path, access }
}

/// Route requirements, evaluated once by the routing layer.
pub const ROUTE_GUARDS: &[RouteGuard] = &[
    guard("/signin", Access::Public),
    guard("/", Access::Authenticated),
    guard("/demo-users", Access::Authenticated),
    guard("/pages/auction-products", Access::Role(Role::SuperAdmin)),
    guard("/pages/categories", Access::Role(Role::SuperAdmin)),
    guard("/car-brands", Access::Role(Role::SuperAdmin)),
    guard("/mobile-brands", Access::Role(Role::SuperAdmin)),
    guard("/computer-brands", Access::Role(Role::SuperAdmin)),
    guard("/jewelry-brands", Access::Role(Role::SuperAdmin)),
    guard("/electronics-brands", Access::Role(Role::SuperAdmin)),
    guard("/pages/my-products", Access::Role(Role::PawnshopOwner)),
    guard("/pages/add-product", Access::Role(Role::PawnshopOwner)),
];

/// Requirement for `path`. Query strings and a trailing slash are ignored;
/// paths missing from the table require a session.
pub fn access_for_path(path: &str) -> Access {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTE_GUARDS
        .iter()
        .find(|g| g.path == normalized)
        .map(|g| g.access)
        .unwrap_or(Access::Authenticated)
}

/// Home page for a role. Owners have no dashboard and are sent to their listings.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin => "/",
        Role::PawnshopOwner => "/pages/my-products",
    }
}
