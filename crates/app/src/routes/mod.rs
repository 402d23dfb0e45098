pub mod add_product;
pub mod auction_products;
pub mod brands;
pub mod categories;
pub mod demo_users;
pub mod home;
pub mod my_products;
pub mod not_found;
pub mod signin;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdChevronDown, LdFileText, LdLayoutDashboard, LdLock, LdLogOut, LdMenu,
    LdUserCheck,
};
use dioxus_free_icons::Icon;
use shared_types::{
    access_for_path, active_submenu, landing_path, nav_tree, show_others_section, toggle_submenu,
    AccessDecision, NavIcon, NavItem, NavSection, OpenSubmenu, Role,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarMenuSub, SidebarMenuSubButton, SidebarMenuSubItem,
    SidebarProvider, SidebarTrigger, Spinner,
};

use add_product::AddProduct;
use auction_products::AuctionProducts;
use brands::{CarBrands, ComputerBrands, ElectronicsBrands, JewelryBrands, MobileBrands};
use categories::Categories;
use demo_users::DemoUsers;
use home::Home;
use my_products::MyProducts;
use not_found::NotFound;
use signin::SignIn;

/// Application routes. Access rules live in `shared_types::ROUTE_GUARDS`,
/// keyed by these paths.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/signin")]
    SignIn {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/pages/auction-products")]
    AuctionProducts {},
    #[route("/pages/my-products")]
    MyProducts {},
    #[route("/pages/add-product")]
    AddProduct {},
    #[route("/pages/categories")]
    Categories {},
    // ── Brands ──
    #[route("/car-brands")]
    CarBrands {},
    #[route("/mobile-brands")]
    MobileBrands {},
    #[route("/computer-brands")]
    ComputerBrands {},
    #[route("/jewelry-brands")]
    JewelryBrands {},
    #[route("/electronics-brands")]
    ElectronicsBrands {},
    #[route("/demo-users")]
    DemoUsers {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Router target for a role's landing page.
pub fn landing_route(role: Role) -> Route {
    landing_path(role).parse().unwrap_or(Route::Home {})
}

/// Evaluates the route guard table once for every protected page.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if auth.is_checking() {
        return rsx! {
            Spinner { label: "Loading..." }
        };
    }

    let path = route.to_string();
    let decision = auth.decide(&access_for_path(&path));
    tracing::debug!(path = %path, ?decision, "route guard");

    match decision {
        AccessDecision::Allow => rsx! { Outlet::<Route> {} },
        AccessDecision::SignInRequired => {
            navigator().replace(Route::SignIn {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        AccessDecision::Denied { message } => rsx! {
            AccessDenied { message: message.to_string() }
        },
    }
}

#[component]
fn AccessDenied(message: String) -> Element {
    let auth = use_auth();
    let home = auth.role().map(landing_route).unwrap_or(Route::SignIn {});

    rsx! {
        div { class: "access-denied",
            Card { class: "access-denied-card",
                CardContent {
                    h1 { class: "access-denied-title", "Access Denied" }
                    p { class: "access-denied-message", "{message}" }
                    Link { to: home, class: "access-denied-link", "Go to your dashboard" }
                }
            }
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Grid => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } },
        NavIcon::UserCircle => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
        NavIcon::Table => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
        NavIcon::PieChart => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 20, height: 20 } },
        NavIcon::PlugIn => rsx! { Icon::<LdLock> { icon: LdLock, width: 20, height: 20 } },
    }
}

/// Renders one section of the nav tree. `open` is the expanded group, if any.
#[component]
fn NavMenu(
    section: NavSection,
    items: &'static [NavItem],
    path: String,
    open: Option<OpenSubmenu>,
    on_toggle: EventHandler<usize>,
) -> Element {
    rsx! {
        SidebarMenu {
            for (index, item) in items.iter().enumerate() {
                SidebarMenuItem { key: "{item.name}",
                    if item.has_sub_items() {
                        {
                            let expanded = open == Some(OpenSubmenu { section, index });
                            rsx! {
                                SidebarMenuButton {
                                    active: expanded,
                                    expanded: expanded,
                                    onclick: move |_| on_toggle.call(index),
                                    {nav_icon(item.icon)}
                                    span { class: "sidebar-menu-label", "{item.name}" }
                                    span { class: "sidebar-menu-chevron",
                                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 16, height: 16 }
                                    }
                                }
                                SidebarMenuSub { open: expanded,
                                    for sub in item.sub_items.iter() {
                                        SidebarMenuSubItem { key: "{sub.path}",
                                            Link { to: sub.path,
                                                SidebarMenuSubButton { active: sub.path == path,
                                                    "{sub.name}"
                                                    if sub.new {
                                                        Badge { variant: BadgeVariant::Success, "new" }
                                                    }
                                                    if sub.pro {
                                                        Badge { variant: BadgeVariant::Outline, "pro" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    } else if let Some(target) = item.path {
                        Link { to: target,
                            SidebarMenuButton { active: target == path,
                                {nav_icon(item.icon)}
                                span { class: "sidebar-menu-label", "{item.name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Main app layout: role-scoped sidebar, top bar, page outlet.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let role = auth.role();
    let user = auth.current_user();

    let path = route.to_string();
    let tree = nav_tree(role);

    // A manual toggle only sticks while the user stays on the page it was
    // made on; navigating re-derives the open group from the path.
    let mut toggled = use_signal(|| None::<(String, Option<OpenSubmenu>)>);
    let open = match &*toggled.read() {
        Some((at, state)) if *at == path => *state,
        _ => active_submenu(&tree, &path),
    };

    let toggle_path = path.clone();
    let mut toggle = move |section: NavSection, index: usize| {
        toggled.set(Some((toggle_path.clone(), toggle_submenu(open, section, index))));
    };
    let mut toggle_others = toggle.clone();

    let sign_out = move |_: MouseEvent| {
        auth.logout();
        navigator().push(Route::SignIn {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    Link { to: Route::Home {}, class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", "A" }
                        span { class: "sidebar-brand-name sidebar-menu-label", "Auction Admin" }
                    }
                }

                SidebarContent {
                    if !tree.main.is_empty() {
                        SidebarGroup {
                            SidebarGroupLabel { "Menu" }
                            NavMenu {
                                section: NavSection::Main,
                                items: tree.main,
                                path: path.clone(),
                                open: open,
                                on_toggle: move |index| toggle(NavSection::Main, index),
                            }
                        }
                    }
                    if show_others_section(role) && !tree.others.is_empty() {
                        SidebarGroup {
                            SidebarGroupLabel { "Others" }
                            NavMenu {
                                section: NavSection::Others,
                                items: tree.others,
                                path: path.clone(),
                                open: open,
                                on_toggle: move |index| toggle_others(NavSection::Others, index),
                            }
                        }
                    }
                }

                if let Some(user) = user.clone() {
                    SidebarFooter {
                        div { class: "sidebar-user",
                            span { class: "sidebar-user-avatar", "{user.initials()}" }
                            div { class: "sidebar-user-info sidebar-menu-label",
                                p { class: "sidebar-user-name", "{user.name}" }
                                p { class: "sidebar-user-role", "{user.role.display_name()}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "sidebar-sign-out",
                            onclick: sign_out,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            span { class: "sidebar-menu-label", "Sign out" }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    if let Some(user) = user {
                        div { class: "app-header-user",
                            span { class: "app-header-user-name", "{user.name}" }
                            span { class: "app-header-user-email", "{user.email}" }
                        }
                    }
                }
                div { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
