use pretty_assertions::assert_eq;
use shared_types::{
    active_submenu, nav_tree, toggle_submenu, NavSection, OpenSubmenu, Role, ROUTE_GUARDS,
};

#[test]
fn test_admin_brand_pages_expand_categories_group() {
    let tree = nav_tree(Some(Role::SuperAdmin));
    for path in ["/pages/categories", "/car-brands", "/jewelry-brands"] {
        let open = active_submenu(&tree, path).unwrap();
        assert_eq!(open.section, NavSection::Main);
        assert_eq!(tree.main[open.index].name, "Categories");
    }
}

#[test]
fn test_owner_pages_expand_dashboard_group() {
    let tree = nav_tree(Some(Role::PawnshopOwner));
    assert_eq!(
        active_submenu(&tree, "/pages/add-product"),
        Some(OpenSubmenu {
            section: NavSection::Main,
            index: 0
        })
    );
    assert_eq!(active_submenu(&tree, "/pages/categories"), None);
}

#[test]
fn test_signin_link_lives_under_others() {
    let tree = nav_tree(Some(Role::PawnshopOwner));
    let open = active_submenu(&tree, "/signin").unwrap();
    assert_eq!(open.section, NavSection::Others);
    assert_eq!(tree.others[open.index].name, "Authentication");
}

#[test]
fn test_toggle_cycle() {
    let tree = nav_tree(Some(Role::SuperAdmin));
    let mut open = active_submenu(&tree, "/");
    assert_eq!(open.map(|o| o.index), Some(0));

    open = toggle_submenu(open, NavSection::Main, 0);
    assert_eq!(open, None);

    open = toggle_submenu(open, NavSection::Main, 2);
    open = toggle_submenu(open, NavSection::Others, 0);
    assert_eq!(
        open,
        Some(OpenSubmenu {
            section: NavSection::Others,
            index: 0
        })
    );
}

#[test]
fn test_guarded_pages_appear_in_some_tree() {
    let admin = nav_tree(Some(Role::SuperAdmin));
    let owner = nav_tree(Some(Role::PawnshopOwner));
    let linked = |path: &str| {
        [admin, owner].iter().any(|tree| {
            tree.main
                .iter()
                .chain(tree.others.iter())
                .any(|item| item.sub_items.iter().any(|s| s.path == path))
        })
    };
    // mobile brands are reachable from the categories overview only
    let unlinked: Vec<&str> = ROUTE_GUARDS
        .iter()
        .map(|g| g.path)
        .filter(|p| !linked(p))
        .collect();
    assert_eq!(unlinked, ["/mobile-brands"]);
}
