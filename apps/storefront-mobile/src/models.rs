use serde::{Deserialize, Serialize};

/// Product as it travels over the wire.
///
/// Dates stay ISO strings (`2025-01-01` or `2025-01-01T00:00:00.000Z`);
/// malformed values are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

/// `{ "data": ... }` wrapper used by list, create and update responses
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}
