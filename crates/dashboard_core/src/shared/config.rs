use serde::Deserialize;
use std::path::Path;

use crate::list::ListSchema;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub screens: Vec<ListSchema>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Defaults {
    pub page_size: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            page_size: crate::list::schema::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(contents)?;
        if config.defaults.page_size == 0 {
            anyhow::bail!("defaults.page_size must be at least 1");
        }
        if let Some(screen) = config.screens.iter().find(|s| s.default_page_size == Some(0)) {
            anyhow::bail!("screen `{}`: default_page_size must be at least 1", screen.id);
        }
        Ok(config)
    }

    /// Schema of a screen with `[defaults]` applied
    pub fn screen(&self, id: &str) -> Option<ListSchema> {
        self.screens.iter().find(|s| s.id == id).map(|s| {
            let mut schema = s.clone();
            if schema.default_page_size.is_none() {
                schema.default_page_size = Some(self.defaults.page_size);
            }
            schema
        })
    }

    pub fn screen_ids(&self) -> impl Iterator<Item = &str> {
        self.screens.iter().map(|s| s.id.as_str())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[defaults]
page_size = 10

[[screens]]
id = "vendors"
title = "Vendors"
searchable_fields = ["name", "email", "store_name"]
date_field = "joined_at"
sortable_fields = ["name", "store_name", "joined_at", "total_sales", "rating"]
default_sort = { field = "name", direction = "asc" }
[screens.fields]
total_sales = "number"
rating = "number"
verified = "boolean"

[[screens]]
id = "orders"
title = "Orders"
searchable_fields = ["order_number", "customer_name", "vendor_name"]
date_field = "created_at"
sortable_fields = ["order_number", "customer_name", "created_at", "total"]
default_sort = { field = "created_at", direction = "desc" }
[screens.fields]
total = "number"

[[screens]]
id = "products"
title = "Products"
searchable_fields = ["name", "sku", "vendor_name"]
date_field = "created_at"
sortable_fields = ["name", "price", "stock", "created_at"]
default_page_size = 20
[screens.fields]
price = "number"
stock = "number"

[[screens]]
id = "vendor_analytics"
title = "Vendor analytics"
searchable_fields = ["vendor_name"]
date_field = "period_start"
sortable_fields = ["vendor_name", "revenue", "orders", "commission"]
default_sort = { field = "revenue", direction = "desc" }
[screens.fields]
revenue = "number"
orders = "number"
commission = "number"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    Config::from_toml(&contents)
}
