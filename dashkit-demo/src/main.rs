use std::error::Error;
use std::fs::File;
use std::sync::Arc;

use dashkit::form::FieldType;
use dashkit::form::FormField;
use dashkit::form::FormSchema;
use dashkit::form::FormStore;
use dashkit::layout::FileThemeStorage;
use dashkit::layout::LayoutContext;
use dashkit::layout::MemoryThemeStorage;
use dashkit::layout::ThemeStorage;
use dashkit::menu::default_menu;
use dashkit::table::BadgeVariant;
use dashkit::table::ColumnAlign;
use dashkit::table::ColumnHooks;
use dashkit::table::ColumnType;
use dashkit::table::SortDirection;
use dashkit::table::TableColumn;
use dashkit::table::TableOptions;
use dashkit::table::TableStore;
use dashkit::table::TableView;
use dashkit::table::format_value;
use dashkit::validation::FieldHooks;
use dashkit_remote::AjaxConfig;
use dashkit_remote::RemoteTable;
use dashkit_remote::TableDataClient;
use dashkit_remote::mock::MockServer;
use dashkit_remote::mock::ProductCatalog;
use simplelog::{Config, LevelFilter, WriteLogger};

#[tokio::main]
async fn main() {
    let log_path = std::env::temp_dir().join("dashkit-demo.log");
    match File::create(&log_path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", log_path.display(), e),
    }

    if let Err(e) = run().await {
        log::error!("Demo failed: {}", e);
        eprintln!("Error: {}", e);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    products().await?;
    menu();
    layout()?;
    form();
    Ok(())
}

// =============================================================================
// Products table
// =============================================================================

async fn products() -> Result<(), Box<dyn Error>> {
    let server = MockServer::start(ProductCatalog::default()).await?;
    log::info!("Mock API listening on {}", server.url());

    let hooks = ColumnHooks::new()
        .with_formatter("price", |value, _row, _column| {
            format!("${:.2}", value.to_number().unwrap_or(0.0))
        })
        .with_badge_variant("status", |value, _row| match value.as_str() {
            Some("published") => BadgeVariant::Success,
            Some("archived") => BadgeVariant::Danger,
            _ => BadgeVariant::Warning,
        });
    let mut table = TableStore::new(vec![
        TableColumn::new("id", "ID").column_type(ColumnType::Number).sortable(),
        TableColumn::new("name", "Name").sortable(),
        TableColumn::new("category", "Category"),
        TableColumn::new("price", "Price")
            .align(ColumnAlign::Right)
            .formatter("price")
            .sortable(),
        TableColumn::new("stock", "Stock")
            .column_type(ColumnType::Number)
            .sortable(),
        TableColumn::new("status", "Status")
            .column_type(ColumnType::Badge)
            .badge_variant("status"),
    ])
    .with_options(TableOptions::new().with_server_side(true).with_per_page(5))
    .with_hooks(hooks);

    table.set_search("product 1");
    table.set_sort(Some("price"), Some(SortDirection::Desc));

    let remote = RemoteTable::new(TableDataClient::new()?, AjaxConfig::new(server.url()));
    if let Some(page) = remote.load(table.state()).await? {
        let view = TableView::server_page(&page.rows, page.total, table.state());
        println!(
            "Products {}-{} of {} (page {} of {})",
            view.from,
            view.to,
            view.filtered_total,
            table.state().current_page(),
            view.page_count
        );
        for row in &view.rows {
            let cells: Vec<String> = table
                .visible_columns()
                .into_iter()
                .map(|column| format_value(row.get(&column.name), row, column, table.hooks()))
                .collect();
            println!("  {}", cells.join(" | "));
        }
    }

    server.shutdown().await;
    Ok(())
}

// =============================================================================
// Menu
// =============================================================================

fn menu() {
    let menu = default_menu();
    for group in menu.groups() {
        println!("{}", group.label);
        for item in &group.items {
            let marker = if item.has_children() { "+" } else { "-" };
            println!("  {} {}", marker, item.label);
        }
    }
    if let Some(trail) = menu.trail_for_href("/admin/users/roles") {
        println!("Active trail: {}", trail.join(" > "));
    }
}

// =============================================================================
// Layout
// =============================================================================

fn layout() -> Result<(), Box<dyn Error>> {
    let storage: Arc<dyn ThemeStorage> = match FileThemeStorage::in_config_dir() {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            log::warn!("Falling back to in-memory theme storage: {}", e);
            Arc::new(MemoryThemeStorage::new())
        }
    };
    let mut layout = LayoutContext::new(storage, Arc::new(|| false));
    layout.init_theme()?;
    println!("Theme: {}", layout.theme().as_str());
    layout.toggle_sidebar();
    println!("Sidebar collapsed: {}", layout.sidebar_collapsed());
    Ok(())
}

// =============================================================================
// Form
// =============================================================================

fn form() {
    let hooks = FieldHooks::new().with_visibility("has_company", |values| {
        values.get("company").is_some_and(|v| v.is_truthy())
    });
    let schema = match FormSchema::new(vec![
        FormField::new("email", "Email", FieldType::Email).required(),
        FormField::new("age", "Age", FieldType::Number).min(18.0).max(120.0),
        FormField::new("company", "Company", FieldType::Text),
        FormField::new("vat", "VAT number", FieldType::Text).visible_when("has_company"),
    ]) {
        Ok(schema) => schema.with_hooks(hooks),
        Err(e) => {
            log::error!("Invalid form schema: {}", e);
            return;
        }
    };

    let mut form = FormStore::new(schema);
    form.set_field_value("email", "not-an-email");
    form.set_field_value("age", 12);
    if !form.submit() {
        let mut errors: Vec<_> = form.state().errors().iter().collect();
        errors.sort();
        for (field, message) in errors {
            println!("{}: {}", field, message);
        }
    }

    form.set_field_value("company", "Contoso");
    let visible: Vec<&str> = form.visible_fields().iter().map(|f| f.name.as_str()).collect();
    println!("Visible fields: {}", visible.join(", "));
}
