//! # Storefront Application Library
//!
//! Stores, service clients and commands of the Shopfront storefront. A web
//! or desktop shell calls the functions in [`commands`]; the headless binary
//! uses [`run`] to exercise the same path from a terminal.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (Storefront context, run, tracing)
//! ├── config.rs       ◄─── AppConfig: defaults < storefront.toml < env
//! ├── error.rs        ◄─── ServiceError, ConfigError, ApiError
//! ├── services/       ◄─── CatalogService, FileUploader, UserDirectory, ...
//! ├── state/          ◄─── ProductStore, SessionStore, CheckoutStore, Theme
//! └── commands/       ◄─── product, header, register, checkout
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Startup                                │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter (RUST_LOG overrides)           │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults, storefront.toml, SHOPFRONT_* environment                │
//! │                                                                         │
//! │  3. Build Context ────────────────────────────────────────────────────► │
//! │     • ApiClient (timeout, base URL)                                     │
//! │     • empty stores, theme from config                                   │
//! │                                                                         │
//! │  4. Load Product List ────────────────────────────────────────────────► │
//! │     • fetch catalog, apply configured default sort                      │
//! │     • log first page and header                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

use std::sync::Arc;

use shopfront_core::{CategoryFilter, HeaderModel, RegistrationForm};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::{ApiError, ApiResult};
use services::{ApiClient, Notifier, RouteHistory, TracingNotifier};
use state::{CheckoutStore, ProductStore, SessionStore, ThemeState};

/// Everything a storefront session needs, wired from one [`AppConfig`].
#[derive(Clone)]
pub struct Storefront {
    pub config: AppConfig,
    pub api: ApiClient,
    pub products: ProductStore,
    pub session: SessionStore,
    pub checkout: CheckoutStore,
    pub theme: ThemeState,
    pub notifier: Arc<dyn Notifier>,
    pub history: Arc<RouteHistory>,
}

impl Storefront {
    /// Builds the context with the HTTP client and empty stores.
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        let api = ApiClient::new(&config.api).map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            ApiError::internal("Could not initialize the HTTP client")
        })?;
        let theme = ThemeState::new(config.theme.mode);

        Ok(Storefront {
            config,
            api,
            products: ProductStore::new(),
            session: SessionStore::new(),
            checkout: CheckoutStore::new(),
            theme,
            notifier: Arc::new(TracingNotifier),
            history: Arc::new(RouteHistory::new()),
        })
    }

    /// Loads the product list with the configured default sort.
    pub async fn load_products(&self) -> ApiResult<usize> {
        commands::product::load_product_list(
            &self.products,
            &self.api,
            self.notifier.as_ref(),
            self.config.catalog.default_sort,
        )
        .await
    }

    /// Submits the registration dialog against the configured API.
    pub async fn register(
        &self,
        form: RegistrationForm,
    ) -> ApiResult<commands::register::RegistrationOutcome> {
        commands::register::register_user(
            form,
            &self.api,
            &self.api,
            &self.session,
            self.notifier.as_ref(),
            self.config.registration.close_delay(),
        )
        .await
    }

    /// Signs out and navigates to the login page.
    pub fn logout(&self) -> HeaderModel {
        commands::header::logout(&self.session, &self.theme, self.history.as_ref())
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("api", &self.api)
            .field("products", &self.products.len())
            .field("signed_in", &self.session.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// Runs the headless storefront: load config, fetch the catalog, and log
/// the first page and the header.
pub async fn run() -> ApiResult<()> {
    init_tracing();
    info!("Starting Shopfront storefront");

    let config = AppConfig::load(None)?;
    info!(base_url = %config.api.base_url, page_size = config.catalog.page_size, "Configuration loaded");

    let storefront = Storefront::new(config)?;
    let count = storefront.load_products().await?;

    let response = commands::product::get_product_page(
        &storefront.products,
        CategoryFilter::All,
        1,
        storefront.config.catalog.page_size,
    )?;
    info!(
        count,
        shown = response.page.items.len(),
        pages = response.page.page_count,
        categories = response.categories.len(),
        "Product list ready"
    );
    for product in &response.page.items {
        info!(id = product.id, price = %product.price, category = %product.category.name, "{}", product.name);
    }

    let header = commands::header::get_header(&storefront.session, &storefront.theme);
    info!(
        links = header.nav_links.len(),
        signed_in = header.signed_in,
        theme = %storefront.theme.mode(),
        "Header ready"
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for the app crate only
/// - Default: INFO, debug for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,storefront=debug,shopfront_core=debug,reqwest=warn")
    });

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
