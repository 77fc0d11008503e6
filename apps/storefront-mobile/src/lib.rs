//! Storefront client for the financial product catalog.
//!
//! Everything the mobile app needs below the UI:
//!
//! - [`client`]: HTTP client for the catalog API over an [`HttpTransport`]
//! - [`listing`]: search, sort and pagination of the home list
//! - [`form`]: product drafts and the form validator
//! - [`actions`]: save/delete/refresh flows reporting through a [`Notifier`]
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use storefront_mobile::{ClientConfig, ProductClient, ProductListView};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ProductClient::from_config(&ClientConfig::from_env()?)?;
//! let view = ProductListView::new(client.get_products().await?);
//! println!("{}", view.records_label());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod listing;
pub mod models;
pub mod notifications;
pub mod transport;

pub use actions::{ProductActions, SubmitOutcome};
pub use client::ProductClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, TransportError};
pub use form::{
    FormErrors, FormField, FormMode, IdVerifier, ProductDraft, ProductFormValidator,
    ValidationState,
};
pub use listing::{ProductListView, SortChoice, SortOrder, PAGE_SIZE};
pub use models::Product;
pub use notifications::{NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
