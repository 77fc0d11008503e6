use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const PRODUCT_ADDED: &str = "Product added successfully";
pub const PRODUCT_UPDATED: &str = "Product updated successfully";
pub const PRODUCT_REMOVED: &str = "Product removed successfully";

/// Product entity - one entry of the in-memory catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Unique identifier chosen by the client, immutable after creation
    #[validate(length(min = 3, max = 10))]
    #[schema(example = "uno")]
    pub id: String,
    /// Product name
    #[validate(length(min = 6))]
    pub name: String,
    /// Product description
    #[validate(length(min = 10, max = 200))]
    pub description: String,
    /// Logo URI
    #[validate(length(min = 1))]
    pub logo: String,
    /// Release date
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2025-01-01")]
    pub date_release: NaiveDate,
    /// Revision date, normally one year after release
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2026-01-01")]
    pub date_revision: NaiveDate,
}

impl Product {
    /// Shallow merge: fields present in `patch` overwrite, absent ones are kept.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(date_release) = patch.date_release {
            self.date_release = date_release;
        }
        if let Some(date_revision) = patch.date_revision {
            self.date_revision = date_revision;
        }
    }
}

/// DTO for updating an existing product.
///
/// There is no `id` field: an `id` in the body is ignored, so updates can
/// never move a record to another identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductPatch {
    #[validate(length(min = 6))]
    pub name: Option<String>,
    #[validate(length(min = 10, max = 200))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub logo: Option<String>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_release: Option<NaiveDate>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub date_revision: Option<NaiveDate>,
}

impl From<Product> for ProductPatch {
    fn from(product: Product) -> Self {
        Self {
            name: Some(product.name),
            description: Some(product.description),
            logo: Some(product.logo),
            date_release: Some(product.date_release),
            date_revision: Some(product.date_revision),
        }
    }
}

/// `GET /products` body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub data: Vec<Product>,
}

/// Body returned by create and update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductEnvelope {
    pub message: String,
    pub data: Product,
}

/// Body returned by delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Calendar dates on the wire.
///
/// Written as `YYYY-MM-DD`. Read from either `YYYY-MM-DD` or a full ISO
/// date-time such as `2025-01-01T00:00:00.000Z`, keeping only the date part.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let date_part = raw.split('T').next().unwrap_or(raw).trim();
        NaiveDate::parse_from_str(date_part, FORMAT).ok()
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
                None => Ok(None),
            }
        }
    }
}
