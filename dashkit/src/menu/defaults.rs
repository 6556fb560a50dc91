//! Stock dashboard navigation

use super::BadgeVariant;
use super::Menu;
use super::MenuGroup;
use super::MenuItem;

/// The navigation shipped with the dashboard.
pub fn default_menu() -> Menu {
    Menu::new(vec![
        MenuGroup::new(
            "main",
            "Main",
            [
                MenuItem::link("dashboard", "Dashboard", "/admin").icon("📊"),
                MenuItem::link("analytics", "Analytics", "/admin/analytics")
                    .icon("📈")
                    .badge("New", BadgeVariant::Primary),
            ],
        ),
        MenuGroup::new(
            "management",
            "Management",
            [
                MenuItem::new("users", "Users").icon("👥").children([
                    MenuItem::link("users-list", "All Users", "/admin/users"),
                    MenuItem::link("users-roles", "Roles", "/admin/users/roles"),
                    MenuItem::link(
                        "users-permissions",
                        "Permissions",
                        "/admin/users/permissions",
                    ),
                ]),
                MenuItem::new("products", "Products").icon("📦").children([
                    MenuItem::link("products-list", "All Products", "/admin/products"),
                    MenuItem::link(
                        "products-categories",
                        "Categories",
                        "/admin/products/categories",
                    ),
                    MenuItem::link(
                        "products-inventory",
                        "Inventory",
                        "/admin/products/inventory",
                    )
                    .badge("12", BadgeVariant::Warning),
                ]),
                MenuItem::link("orders", "Orders", "/admin/orders")
                    .icon("🛒")
                    .badge("5", BadgeVariant::Danger),
                MenuItem::link("employees", "Employees", "/admin/employees").icon("👔"),
            ],
        ),
        MenuGroup::new(
            "content",
            "Content",
            [
                MenuItem::new("posts", "Posts").icon("📝").children([
                    MenuItem::link("posts-all", "All Posts", "/admin/posts"),
                    MenuItem::link("posts-new", "Create New", "/admin/posts/new"),
                    MenuItem::link("posts-categories", "Categories", "/admin/posts/categories"),
                ]),
                MenuItem::link("media", "Media", "/admin/media").icon("🖼️"),
            ],
        ),
        MenuGroup::new(
            "datatable",
            "DataTable",
            [
                MenuItem::link("table-demo", "Full Demo", "/admin/table-demo")
                    .icon("🚀")
                    .badge("Demo", BadgeVariant::Success),
                MenuItem::link("table-super", "Transactions", "/admin/super-table").icon("💳"),
                MenuItem::link("table-docs", "Documentation", "/admin/table-docs").icon("📚"),
            ],
        ),
        MenuGroup::new(
            "settings",
            "Settings",
            [
                MenuItem::link("general", "General", "/admin/settings/general").icon("⚙️"),
                MenuItem::link(
                    "integrations",
                    "Integrations",
                    "/admin/settings/integrations",
                )
                .icon("🔌"),
            ],
        ),
        MenuGroup::new(
            "forms",
            "Forms",
            [
                MenuItem::link("form-demo", "Basic Form", "/admin/form-demo").icon("📝"),
                MenuItem::link("form-advanced", "Advanced Form", "/admin/form-advanced")
                    .icon("⚙️"),
                MenuItem::link("form-upload", "File Upload", "/admin/form-upload").icon("📤"),
                MenuItem::link(
                    "form-conditional",
                    "Conditional Fields",
                    "/admin/form-conditional",
                )
                .icon("🔀"),
                MenuItem::link("form-validation", "Validation", "/admin/form-validation")
                    .icon("✅"),
                MenuItem::link("form-custom", "Custom Fields", "/admin/form-custom").icon("🎨"),
                MenuItem::link("form-builder", "Form Builder", "/admin/form-builder")
                    .icon("🏗️")
                    .badge("New", BadgeVariant::Success),
            ],
        ),
    ])
}
