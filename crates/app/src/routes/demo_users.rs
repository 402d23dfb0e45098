use dioxus::prelude::*;
use session::{mock_users, DEMO_PASSWORD};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader,
};

/// Sign-in credentials for every demo account.
#[component]
pub fn DemoUsers() -> Element {
    let users = mock_users();

    rsx! {
        PageHeader { title: "Demo Users", description: "Accounts available in this demo" }

        Card {
            CardHeader {
                CardTitle { "Credentials" }
                CardDescription { "Every account signs in with the same password." }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Password" }
                        DataTableColumn { "Role" }
                    }
                    DataTableBody {
                        for user in users {
                            DataTableRow { key: "{user.id}",
                                DataTableCell { "{user.name}" }
                                DataTableCell { code { "{user.email}" } }
                                DataTableCell { code { "{DEMO_PASSWORD}" } }
                                DataTableCell {
                                    Badge { variant: BadgeVariant::Outline, "{user.role.display_name()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
