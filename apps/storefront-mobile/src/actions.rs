//! User-triggered product flows: save, delete, refresh.

use tracing::{error, info, instrument};

use crate::client::ProductClient;
use crate::error::{ClientError, ClientResult};
use crate::form::{FormErrors, FormMode, IdVerifier, ProductDraft, ProductFormValidator};
use crate::listing::ProductListView;
use crate::models::Product;
use crate::notifications::{NoticeKind, Notifier};
use crate::transport::HttpTransport;

pub const PRODUCT_CREATED: &str = "¡Producto creado exitosamente!";
pub const PRODUCT_UPDATED: &str = "¡Producto actualizado exitosamente!";
pub const SAVE_FAILED: &str = "Ocurrió un error al guardar el producto";
pub const PRODUCT_DELETED: &str = "¡Producto eliminado con éxito!";
pub const DELETE_REFUSED: &str = "No se pudo eliminar el producto";
pub const DELETE_FAILED: &str = "Ocurrió un error al eliminar";

/// Result of a form submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FormErrors),
    Saved(Product),
    Failed(ClientError),
}

pub struct ProductActions<T: HttpTransport, N: Notifier> {
    client: ProductClient<T>,
    notifier: N,
}

impl<T: HttpTransport, N: Notifier> ProductActions<T, N> {
    pub fn new(client: ProductClient<T>, notifier: N) -> Self {
        Self { client, notifier }
    }

    pub fn client(&self) -> &ProductClient<T> {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Validates `draft`, then creates or updates depending on the form mode
    #[instrument(skip_all, fields(product_id = %draft.id))]
    pub async fn submit<V: IdVerifier>(
        &self,
        validator: &mut ProductFormValidator<V>,
        draft: &ProductDraft,
    ) -> SubmitOutcome {
        if !validator.validate(draft).await {
            return SubmitOutcome::Invalid(validator.errors().clone());
        }

        let product = draft.to_product();
        let (result, success) = match validator.mode() {
            FormMode::Create => (self.client.add_product(&product).await, PRODUCT_CREATED),
            FormMode::Edit => (self.client.update_product(&product).await, PRODUCT_UPDATED),
        };

        match result {
            Ok(saved) => {
                info!(id = %saved.id, "Product saved");
                self.notifier.notify(success, NoticeKind::Success);
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                error!(error = %e, "Saving product failed");
                self.notifier.notify(SAVE_FAILED, NoticeKind::Error);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Deletes a product; `true` when the server confirmed it
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> bool {
        match self.client.delete_product(id).await {
            Ok(true) => {
                self.notifier.notify(PRODUCT_DELETED, NoticeKind::Success);
                true
            }
            Ok(false) => {
                self.notifier.notify(DELETE_REFUSED, NoticeKind::Error);
                false
            }
            Err(e) => {
                error!(error = %e, "Deleting product failed");
                self.notifier.notify(DELETE_FAILED, NoticeKind::Error);
                false
            }
        }
    }

    /// Reloads the catalog into `view`; on failure the view is left as is
    #[instrument(skip_all)]
    pub async fn refresh(&self, view: &mut ProductListView) -> ClientResult<usize> {
        let products = self
            .client
            .get_products()
            .await
            .inspect_err(|e| error!(error = %e, "Refreshing products failed"))?;

        let count = products.len();
        view.set_products(products);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::form::{FormField, MockIdVerifier, ProductFormValidator, PAST_DATE};
    use crate::notifications::MockNotifier;
    use crate::transport::{HttpResponse, MockHttpTransport};
    use chrono::NaiveDate;
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn draft(id: &str) -> ProductDraft {
        ProductDraft {
            id: id.to_string(),
            name: "Cuenta de ahorro".to_string(),
            description: "Cuenta de ahorro con rendimiento mensual".to_string(),
            logo: "https://example.com/ahorro.png".to_string(),
            date_release: "01/07/2025".to_string(),
            date_revision: "01/07/2026".to_string(),
        }
    }

    fn create_validator() -> ProductFormValidator<MockIdVerifier> {
        let mut verifier = MockIdVerifier::new();
        verifier.expect_id_exists().returning(|_| false);
        ProductFormValidator::new(verifier, FormMode::Create, ProductDraft::blank(today()))
            .with_today(today())
    }

    fn notifier_expecting(message: &'static str, kind: NoticeKind) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(move |m, k| m == message && *k == kind)
            .times(1)
            .return_const(());
        notifier
    }

    #[tokio::test]
    async fn test_submit_create_sends_iso_dates_and_notifies() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, body| {
                *method == Method::POST
                    && path == "/products"
                    && body.as_ref().map(|b| b["date_release"] == "2025-07-01").unwrap_or(false)
            })
            .times(1)
            .returning(|_, _, body| {
                Ok(HttpResponse::new(
                    StatusCode::CREATED,
                    json!({ "message": "Product added successfully", "data": body }).to_string(),
                ))
            });

        let actions = ProductActions::new(
            ProductClient::new(transport),
            notifier_expecting(PRODUCT_CREATED, NoticeKind::Success),
        );
        let mut validator = create_validator();

        match actions.submit(&mut validator, &draft("ahr-01")).await {
            SubmitOutcome::Saved(product) => {
                assert_eq!(product.id, "ahr-01");
                assert_eq!(product.date_revision, "2026-07-01");
            }
            other => panic!("expected Saved, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_invalid_never_calls_network() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(0);
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(0);

        let actions = ProductActions::new(ProductClient::new(transport), notifier);
        let mut validator = create_validator();
        let mut invalid = draft("ahr-01");
        invalid.date_release = "01/01/2020".to_string();

        match actions.submit(&mut validator, &invalid).await {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.get(&FormField::DateRelease).map(String::as_str), Some(PAST_DATE));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_edit_failure_notifies_error() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|method, path, _| *method == Method::PUT && path == "/products/ahr-01")
            .returning(|_, _, _| Err(TransportError::new("Network error")));

        let actions = ProductActions::new(
            ProductClient::new(transport),
            notifier_expecting(SAVE_FAILED, NoticeKind::Error),
        );
        let mut verifier = MockIdVerifier::new();
        verifier.expect_id_exists().times(0);
        let mut validator = ProductFormValidator::new(verifier, FormMode::Edit, draft("ahr-01"))
            .with_today(today());

        match actions.submit(&mut validator, &draft("ahr-01")).await {
            SubmitOutcome::Failed(err) => assert_eq!(err.to_string(), "Network error"),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_outcomes() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|_, path, _| path == "/products/uno")
            .returning(|_, _, _| Ok(HttpResponse::new(StatusCode::OK, "{}")));
        transport
            .expect_send()
            .withf(|_, path, _| path == "/products/dos")
            .returning(|_, _, _| Ok(HttpResponse::new(StatusCode::NOT_FOUND, "{}")));
        transport
            .expect_send()
            .withf(|_, path, _| path == "/products/tres")
            .returning(|_, _, _| Err(TransportError::new("Network error")));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|m, k| m == PRODUCT_DELETED && *k == NoticeKind::Success)
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|m, k| m == DELETE_REFUSED && *k == NoticeKind::Error)
            .times(1)
            .return_const(());
        notifier
            .expect_notify()
            .withf(|m, k| m == DELETE_FAILED && *k == NoticeKind::Error)
            .times(1)
            .return_const(());

        let actions = ProductActions::new(ProductClient::new(transport), notifier);

        assert!(actions.delete("uno").await);
        assert!(!actions.delete("dos").await);
        assert!(!actions.delete("tres").await);
    }

    #[tokio::test]
    async fn test_refresh_keeps_view_on_failure() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().times(1).returning(|_, _, _| {
            Ok(HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "{}"))
        });

        let actions = ProductActions::new(ProductClient::new(transport), MockNotifier::new());
        let existing = draft("uno").to_product();
        let mut view = ProductListView::new(vec![existing.clone()]);

        let err = actions.refresh(&mut view).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch products");
        assert_eq!(view.products(), &[existing]);
    }

    #[tokio::test]
    async fn test_refresh_replaces_products() {
        let mut transport = MockHttpTransport::new();
        transport.expect_send().returning(|_, _, _| {
            let products: Vec<Product> = (0..10)
                .map(|i| draft(&format!("p{:02}", i)).to_product())
                .collect();
            Ok(HttpResponse::new(
                StatusCode::OK,
                json!({ "data": products }).to_string(),
            ))
        });

        let actions = ProductActions::new(ProductClient::new(transport), MockNotifier::new());
        let mut view = ProductListView::default();

        assert_eq!(actions.refresh(&mut view).await.unwrap(), 10);
        assert_eq!(view.visible().len(), 8);
        assert!(view.has_more());
    }
}
