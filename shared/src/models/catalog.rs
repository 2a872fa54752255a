//! Catalog Model
//!
//! Read-only company-profile content shown on the home page. The admin CRUD
//! for these lives outside this workspace; only the shapes the home page
//! reads are modelled, and every field but `id` is optional so partial
//! records from the backend still deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Home page hero slide
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Image path, resolved against the asset host by the UI shell
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "buttonText", alias = "button_text")]
    pub button_text: Option<String>,
}

/// Catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Company profile settings (single record)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_about: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub company_phone: Option<String>,
    #[serde(default)]
    pub company_email: Option<String>,
    #[serde(default)]
    pub company_working_hours: Option<String>,
    #[serde(default)]
    pub google_maps_embed: Option<String>,
}

/// Catalog list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
}

/// Featured products on the home page: first page, six items
pub const FEATURED_PRODUCTS: ProductQuery = ProductQuery { page: 1, limit: 6 };
