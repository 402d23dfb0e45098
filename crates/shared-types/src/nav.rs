//! Role-scoped sidebar navigation.
//!
//! Trees are hand-authored per role and never change at runtime. The app
//! maps [`NavIcon`] to concrete icon components.

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Grid,
    UserCircle,
    Table,
    PieChart,
    PlugIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSubItem {
    pub name: &'static str,
    pub path: &'static str,
    pub pro: bool,
    pub new: bool,
}

/// A top-level sidebar entry. Either a direct link (`path`) or a
/// collapsible group (`sub_items`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub icon: NavIcon,
    pub path: Option<&'static str>,
    pub sub_items: &'static [NavSubItem],
}

impl NavItem {
    pub fn has_sub_items(&self) -> bool {
        !self.sub_items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Main,
    Others,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavTree {
    pub main: &'static [NavItem],
    pub others: &'static [NavItem],
}

impl NavTree {
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.others.is_empty()
    }

    pub fn section(&self, section: NavSection) -> &'static [NavItem] {
        match section {
            NavSection::Main => self.main,
            NavSection::Others => self.others,
        }
    }
}

const fn sub(name: &'static str, path: &'static str) -> NavSubItem {
    NavSubItem {
        name,
        path,
        pro: false,
        new: false,
    }
}

const fn group(name: &'static str, icon: NavIcon, sub_items: &'static [NavSubItem]) -> NavItem {
    NavItem {
        name,
        icon,
        path: None,
        sub_items,
    }
}

const SUPER_ADMIN_MAIN: &[NavItem] = &[
    group(
        "Dashboard",
        NavIcon::Grid,
        &[
            sub("Дуудлага худалдааны бүтээгдэхүүнүүд", "/"),
            sub("Аукцион бүтээгдэхүүн", "/pages/auction-products"),
            sub("Бүтээгдэхүүн нэмэх", "/pages/add-product"),
        ],
    ),
    group(
        "User Management",
        NavIcon::UserCircle,
        &[
            sub("All Users", "/users"),
            sub("Pawnshop Owners", "/pawnshop-owners"),
        ],
    ),
    group(
        "Reports",
        NavIcon::Table,
        &[
            sub("Sales Report", "/sales-report"),
            sub("User Activity", "/user-activity"),
        ],
    ),
    group("Demo", NavIcon::UserCircle, &[sub("Demo Users", "/demo-users")]),
    group(
        "Categories",
        NavIcon::Grid,
        &[
            sub("All Categories", "/pages/categories"),
            sub("Car Brands", "/car-brands"),
            sub("Computer Brands", "/computer-brands"),
            sub("Jewelry Brands", "/jewelry-brands"),
            sub("Electronics Brands", "/electronics-brands"),
        ],
    ),
];

const SUPER_ADMIN_OTHERS: &[NavItem] = &[
    group(
        "Analytics",
        NavIcon::PieChart,
        &[
            sub("Dashboard Analytics", "/analytics"),
            sub("Revenue Analytics", "/revenue-analytics"),
        ],
    ),
    group(
        "Authentication",
        NavIcon::PlugIn,
        &[sub("Sign In", "/signin"), sub("Sign Up", "/signup")],
    ),
];

const PAWNSHOP_OWNER_MAIN: &[NavItem] = &[group(
    "Dashboard",
    NavIcon::Grid,
    &[
        sub("My Products", "/pages/my-products"),
        sub("Add Product", "/pages/add-product"),
    ],
)];

const PAWNSHOP_OWNER_OTHERS: &[NavItem] = &[
    group(
        "Profile",
        NavIcon::UserCircle,
        &[sub("My Profile", "/profile"), sub("Settings", "/settings")],
    ),
    group(
        "Authentication",
        NavIcon::PlugIn,
        &[sub("Sign In", "/signin"), sub("Sign Up", "/signup")],
    ),
];

/// The fixed tree for `role`; no role yields an empty tree.
pub fn nav_tree(role: Option<Role>) -> NavTree {
    match role {
        Some(Role::SuperAdmin) => NavTree {
            main: SUPER_ADMIN_MAIN,
            others: SUPER_ADMIN_OTHERS,
        },
        Some(Role::PawnshopOwner) => NavTree {
            main: PAWNSHOP_OWNER_MAIN,
            others: PAWNSHOP_OWNER_OTHERS,
        },
        None => NavTree::default(),
    }
}

/// Only super admins get the "Others" heading rendered.
pub fn show_others_section(role: Option<Role>) -> bool {
    role == Some(Role::SuperAdmin)
}

/// Identifies one expanded group in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenSubmenu {
    pub section: NavSection,
    pub index: usize,
}

/// Group to auto-expand for `pathname`. Main is scanned before others and
/// the last matching group wins.
pub fn active_submenu(tree: &NavTree, pathname: &str) -> Option<OpenSubmenu> {
    let mut found = None;
    for section in [NavSection::Main, NavSection::Others] {
        for (index, item) in tree.section(section).iter().enumerate() {
            if item.sub_items.iter().any(|s| s.path == pathname) {
                found = Some(OpenSubmenu { section, index });
            }
        }
    }
    found
}

/// Clicking an open group closes it; clicking any other group opens it.
pub fn toggle_submenu(
    current: Option<OpenSubmenu>,
    section: NavSection,
    index: usize,
) -> Option<OpenSubmenu> {
    let clicked = OpenSubmenu { section, index };
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[NavItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn no_role_gives_empty_tree() {
        let tree = nav_tree(None);
        assert!(tree.is_empty());
        assert!(!show_others_section(None));
    }

    #[test]
    fn super_admin_tree() {
        let tree = nav_tree(Some(Role::SuperAdmin));
        assert_eq!(
            names(tree.main),
            ["Dashboard", "User Management", "Reports", "Demo", "Categories"]
        );
        assert_eq!(names(tree.others), ["Analytics", "Authentication"]);
        assert!(show_others_section(Some(Role::SuperAdmin)));
    }

    #[test]
    fn owner_tree_has_no_admin_pages() {
        let tree = nav_tree(Some(Role::PawnshopOwner));
        assert_eq!(names(tree.main), ["Dashboard"]);
        assert_eq!(names(tree.others), ["Profile", "Authentication"]);
        assert!(!show_others_section(Some(Role::PawnshopOwner)));
        let paths: Vec<_> = tree
            .main
            .iter()
            .flat_map(|i| i.sub_items.iter().map(|s| s.path))
            .collect();
        assert_eq!(paths, ["/pages/my-products", "/pages/add-product"]);
    }

    #[test]
    fn every_group_has_sub_items() {
        for role in [Role::SuperAdmin, Role::PawnshopOwner] {
            let tree = nav_tree(Some(role));
            for item in tree.main.iter().chain(tree.others) {
                assert!(item.has_sub_items(), "{} has no sub items", item.name);
                assert!(item.path.is_none());
            }
        }
    }

    #[test]
    fn active_submenu_finds_group() {
        let tree = nav_tree(Some(Role::SuperAdmin));
        assert_eq!(
            active_submenu(&tree, "/car-brands"),
            Some(OpenSubmenu {
                section: NavSection::Main,
                index: 4
            })
        );
        assert_eq!(
            active_submenu(&tree, "/signin"),
            Some(OpenSubmenu {
                section: NavSection::Others,
                index: 1
            })
        );
        assert_eq!(active_submenu(&tree, "/nowhere"), None);
    }

    #[test]
    fn active_submenu_requires_exact_path() {
        let tree = nav_tree(Some(Role::PawnshopOwner));
        assert_eq!(active_submenu(&tree, "/pages/my-products/"), None);
    }

    #[test]
    fn toggle_opens_and_closes() {
        let opened = toggle_submenu(None, NavSection::Main, 2);
        assert_eq!(
            opened,
            Some(OpenSubmenu {
                section: NavSection::Main,
                index: 2
            })
        );
        assert_eq!(toggle_submenu(opened, NavSection::Main, 2), None);
        assert_eq!(
            toggle_submenu(opened, NavSection::Others, 2),
            Some(OpenSubmenu {
                section: NavSection::Others,
                index: 2
            })
        );
    }
}
