//! Product form: draft state and validation

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use strum::{AsRefStr, Display};
use tracing::debug;

use crate::client::ProductClient;
use crate::dates::{
    display_to_iso, format_display, iso_to_display, mask_date_input, parse_display,
    revision_date_for, today,
};
use crate::models::Product;
use crate::transport::HttpTransport;

pub const REQUIRED: &str = "Este campo es requerido!";
pub const MIN_3_CHARS: &str = "Mínimo 3 caracteres";
pub const MAX_10_CHARS: &str = "Máximo 10 caracteres";
pub const ID_TAKEN: &str = "ID ya existe";
pub const MIN_6_CHARS: &str = "Mínimo 6 caracteres";
pub const MIN_10_CHARS: &str = "Mínimo 10 caracteres";
pub const INVALID_FORMAT: &str = "Formato inválido (DD/MM/YYYY)";
pub const INVALID_DATE: &str = "Fecha inválida";
pub const PAST_DATE: &str = "No puede ser menor al día actual";

/// Longest description the form accepts
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Advisory identifier uniqueness check
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdVerifier: Send + Sync {
    async fn id_exists(&self, id: &str) -> bool;
}

#[async_trait]
impl<T: HttpTransport> IdVerifier for ProductClient<T> {
    async fn id_exists(&self, id: &str) -> bool {
        self.verify_id(id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

/// Field errors, one message per field
pub type FormErrors = BTreeMap<FormField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    Untouched,
    Validating,
    Valid,
    Invalid,
}

/// In-progress form values. Dates are `DD/MM/YYYY` text as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

impl ProductDraft {
    /// Empty create form: released today, revised a year later
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date_release: format_display(today),
            date_revision: format_display(revision_date_for(today)),
            ..Default::default()
        }
    }

    /// Edit form pre-filled from a stored product
    pub fn from_product(product: &Product) -> Self {
        let date_release = iso_to_display(&product.date_release);
        let mut date_revision = iso_to_display(&product.date_revision);
        if date_revision.is_empty() {
            if let Some(release) = parse_display(&date_release) {
                date_revision = format_display(revision_date_for(release));
            }
        }

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            logo: product.logo.clone(),
            date_release,
            date_revision,
        }
    }

    /// Wire form of the draft, with ISO dates
    pub fn to_product(&self) -> Product {
        Product {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            logo: self.logo.clone(),
            date_release: display_to_iso(&self.date_release),
            date_revision: display_to_iso(&self.date_revision),
        }
    }

    /// Masks typed release text; a complete valid date re-derives the revision
    pub fn set_release_date(&mut self, text: &str) {
        self.date_release = mask_date_input(text);
        if self.date_release.len() == 10 {
            if let Some(release) = parse_display(&self.date_release) {
                self.date_revision = format_display(revision_date_for(release));
            }
        }
    }

    /// Stores at most 200 characters
    pub fn set_description(&mut self, text: &str) {
        self.description = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
    }

    pub fn is_dirty(&self, initial: &ProductDraft) -> bool {
        self != initial
    }
}

/// Gatekeeper for form submission.
///
/// Every `validate` call recomputes the whole error map, including the
/// awaited identifier check on create.
pub struct ProductFormValidator<V: IdVerifier> {
    verifier: V,
    mode: FormMode,
    initial: ProductDraft,
    today: NaiveDate,
    state: ValidationState,
    errors: FormErrors,
}

impl<V: IdVerifier> ProductFormValidator<V> {
    pub fn new(verifier: V, mode: FormMode, initial: ProductDraft) -> Self {
        Self {
            verifier,
            mode,
            initial,
            today: today(),
            state: ValidationState::Untouched,
            errors: FormErrors::new(),
        }
    }

    /// Create form starting from a blank draft
    pub fn for_create(verifier: V) -> Self {
        let today = today();
        Self::new(verifier, FormMode::Create, ProductDraft::blank(today)).with_today(today)
    }

    /// Edit form for an existing product
    pub fn for_edit(verifier: V, product: &Product) -> Self {
        Self::new(verifier, FormMode::Edit, ProductDraft::from_product(product))
    }

    /// Overrides the date that release dates are compared against
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Draft the form started from
    pub fn initial(&self) -> &ProductDraft {
        &self.initial
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Runs every rule against `draft`; `true` when submission may proceed
    pub async fn validate(&mut self, draft: &ProductDraft) -> bool {
        self.state = ValidationState::Validating;

        let mut errors = FormErrors::new();
        if let Some(message) = self.id_error(&draft.id).await {
            errors.insert(FormField::Id, message.to_string());
        }
        if let Some(message) = min_chars_error(&draft.name, 6, MIN_6_CHARS) {
            errors.insert(FormField::Name, message.to_string());
        }
        if let Some(message) = min_chars_error(&draft.description, 10, MIN_10_CHARS) {
            errors.insert(FormField::Description, message.to_string());
        }
        if draft.logo.is_empty() {
            errors.insert(FormField::Logo, REQUIRED.to_string());
        }
        if let Some(message) = self.release_error(&draft.date_release) {
            errors.insert(FormField::DateRelease, message.to_string());
        }
        if draft.date_revision.is_empty() {
            errors.insert(FormField::DateRevision, REQUIRED.to_string());
        }

        debug!(mode = ?self.mode, errors = errors.len(), "Validated product form");
        self.state = if errors.is_empty() {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        };
        self.errors = errors;
        self.state == ValidationState::Valid
    }

    /// Check run while the release date is typed. Once the text is complete
    /// it either flags a past date or clears the release error.
    pub fn live_release_check(&mut self, text: &str) {
        if text.chars().count() != 10 {
            return;
        }

        match parse_display(text) {
            Some(release) if release < self.today && !self.is_original_release(text) => {
                self.errors
                    .insert(FormField::DateRelease, PAST_DATE.to_string());
            }
            _ => {
                self.errors.remove(&FormField::DateRelease);
            }
        }
    }

    /// Clears errors and hands back the initial draft
    pub fn reset(&mut self) -> ProductDraft {
        self.errors.clear();
        self.state = ValidationState::Untouched;
        self.initial.clone()
    }

    async fn id_error(&self, id: &str) -> Option<&'static str> {
        let len = id.chars().count();
        if len == 0 {
            Some(REQUIRED)
        } else if len < 3 {
            Some(MIN_3_CHARS)
        } else if len > 10 {
            Some(MAX_10_CHARS)
        } else if self.mode == FormMode::Create && self.verifier.id_exists(id).await {
            Some(ID_TAKEN)
        } else {
            None
        }
    }

    fn release_error(&self, text: &str) -> Option<&'static str> {
        if text.is_empty() {
            return Some(REQUIRED);
        }
        if text.chars().count() != 10 {
            return Some(INVALID_FORMAT);
        }

        let Some(release) = parse_display(text) else {
            return Some(INVALID_DATE);
        };
        if release < self.today && !self.is_original_release(text) {
            return Some(PAST_DATE);
        }
        None
    }

    /// Editing may keep a past release date as long as it is unchanged
    fn is_original_release(&self, text: &str) -> bool {
        self.mode == FormMode::Edit && text == self.initial.date_release
    }
}

fn min_chars_error(value: &str, min: usize, message: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(REQUIRED)
    } else if value.chars().count() < min {
        Some(message)
    } else {
        None
    }
}
