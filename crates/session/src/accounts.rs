use shared_types::{Role, User};

/// Shared password of every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// The fixed demo accounts, one per role.
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "admin@auction.com".to_string(),
            name: "Super Admin".to_string(),
            role: Role::SuperAdmin,
            avatar: None,
        },
        User {
            id: "2".to_string(),
            email: "pawnshop@auction.com".to_string(),
            name: "Pawnshop Owner".to_string(),
            role: Role::PawnshopOwner,
            avatar: None,
        },
    ]
}

/// Matches on exact email and role, then the demo password. Wrong password
/// and wrong role are indistinguishable to the caller.
pub fn authenticate(email: &str, password: &str, role: Role) -> Option<User> {
    mock_users()
        .into_iter()
        .find(|u| u.email == email && u.role == role)
        .filter(|_| password == DEMO_PASSWORD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_credentials_return_the_account() {
        let user = authenticate("admin@auction.com", DEMO_PASSWORD, Role::SuperAdmin).unwrap();
        assert_eq!(user.id, "1");
        let user = authenticate("pawnshop@auction.com", DEMO_PASSWORD, Role::PawnshopOwner).unwrap();
        assert_eq!(user.name, "Pawnshop Owner");
    }

    #[test]
    fn wrong_password_or_role_fails() {
        assert!(authenticate("admin@auction.com", "wrong", Role::SuperAdmin).is_none());
        assert!(authenticate("admin@auction.com", DEMO_PASSWORD, Role::PawnshopOwner).is_none());
        assert!(authenticate("nobody@auction.com", DEMO_PASSWORD, Role::SuperAdmin).is_none());
    }

    #[test]
    fn email_match_is_exact() {
        assert!(authenticate("Admin@auction.com", DEMO_PASSWORD, Role::SuperAdmin).is_none());
        assert!(authenticate(" admin@auction.com", DEMO_PASSWORD, Role::SuperAdmin).is_none());
    }
}
