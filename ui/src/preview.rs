//! Projects the form store onto an image endpoint path.

use crate::catalog::Category;
use crate::state::FormStateStore;

/// Version prefix of every image route.
pub const API_PREFIX: &str = "/v1";

/// `/v1/{path}?{query}` for `category`, with one parameter per field in declaration order.
///
/// Fields with no store entry are sent empty.
pub fn build(category: &Category, store: &FormStateStore) -> String {
    let query = category
        .fields
        .iter()
        .map(|field| {
            let value = store
                .get(field.id)
                .map(|value| value.query_value().into_owned())
                .unwrap_or_default();
            format!(
                "{}={}",
                urlencoding::encode(field.query),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{API_PREFIX}/{}?{query}", category.path)
}
