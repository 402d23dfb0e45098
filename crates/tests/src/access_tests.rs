use pretty_assertions::assert_eq;
use shared_types::{
    access_for_path, evaluate, landing_path, nav_tree, AccessDecision, Role, ALL_ROLES,
    ROUTE_GUARDS,
};

use crate::common;

#[test]
fn test_signed_out_visitor_only_reaches_signin() {
    for guard in ROUTE_GUARDS {
        let decision = evaluate(None, &guard.access);
        if guard.path == "/signin" {
            assert_eq!(decision, AccessDecision::Allow);
        } else {
            assert_eq!(decision, AccessDecision::SignInRequired, "{}", guard.path);
        }
    }
}

#[test]
fn test_each_role_lands_on_an_allowed_page() {
    for role in ALL_ROLES.iter().copied() {
        let user = common::demo_user(role);
        let access = access_for_path(landing_path(role));
        assert!(evaluate(Some(&user), &access).is_allowed(), "{role:?}");
    }
}

#[test]
fn test_owner_nav_links_are_all_reachable() {
    let owner = common::demo_user(Role::PawnshopOwner);
    for item in nav_tree(Some(Role::PawnshopOwner)).main {
        for sub in item.sub_items {
            let decision = evaluate(Some(&owner), &access_for_path(sub.path));
            assert!(decision.is_allowed(), "{}", sub.path);
        }
    }
}

#[test]
fn test_admin_is_denied_owner_pages() {
    let admin = common::demo_user(Role::SuperAdmin);
    for path in ["/pages/my-products", "/pages/add-product"] {
        assert_eq!(
            evaluate(Some(&admin), &access_for_path(path)),
            AccessDecision::Denied {
                message: "This page is only accessible to Pawnshop Owners."
            }
        );
    }
}

#[test]
fn test_owner_is_denied_admin_pages() {
    let owner = common::demo_user(Role::PawnshopOwner);
    for path in [
        "/pages/auction-products",
        "/pages/categories",
        "/car-brands",
        "/mobile-brands",
        "/electronics-brands",
    ] {
        assert_eq!(
            evaluate(Some(&owner), &access_for_path(path)),
            AccessDecision::Denied {
                message: "This page is only accessible to Super Admins."
            },
            "{path}"
        );
    }
}

#[test]
fn test_shared_pages_open_to_both_roles() {
    for role in ALL_ROLES.iter().copied() {
        let user = common::demo_user(role);
        for path in ["/demo-users", "/signin", "/some/unknown/page"] {
            assert!(evaluate(Some(&user), &access_for_path(path)).is_allowed(), "{path}");
        }
    }
}

#[test]
fn test_path_normalization() {
    assert_eq!(access_for_path("/car-brands/"), access_for_path("/car-brands"));
    assert_eq!(access_for_path("/car-brands?page=2"), access_for_path("/car-brands"));
    assert_eq!(access_for_path(""), access_for_path("/"));
}
