//! Home page readiness gate
//!
//! Banners, featured products and company settings load together. The page
//! renders only once all three settle, and a single failure empties all of
//! them rather than showing a partial page.

use std::sync::Arc;

use shared::models::{Banner, CompanySettings, FEATURED_PRODUCTS, Product};

use super::ViewScope;
use super::scope::ScopeHandle;
use crate::{CatalogApi, HttpClient};

pub struct HomeView<C> {
    api: CatalogApi<C>,
    scope: ViewScope,
    loading: bool,
    banners: Vec<Banner>,
    featured: Vec<Product>,
    settings: CompanySettings,
}

impl<C: HttpClient> HomeView<C> {
    pub fn new(http: Arc<C>) -> Self {
        Self {
            api: CatalogApi::new(http),
            scope: ViewScope::new(),
            loading: true,
            banners: Vec::new(),
            featured: Vec::new(),
            settings: CompanySettings::default(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn featured_products(&self) -> &[Product] {
        &self.featured
    }

    pub fn settings(&self) -> &CompanySettings {
        &self.settings
    }

    pub fn scope_handle(&self) -> ScopeHandle {
        self.scope.handle()
    }

    pub async fn load(&mut self) {
        self.loading = true;

        let batch = async {
            tokio::try_join!(
                self.api.banners(),
                self.api.products(FEATURED_PRODUCTS),
                self.api.settings(),
            )
        };
        let Some(result) = self.scope.run(batch).await else {
            return;
        };

        match result {
            Ok((banners, products, settings)) => {
                self.banners = banners;
                self.featured = products.items;
                self.settings = settings;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load home page data");
                self.banners.clear();
                self.featured.clear();
                self.settings = CompanySettings::default();
            }
        }
        self.loading = false;
    }
}
