//! Root page handler.

use crate::config::DEPLOYMENT_MESSAGE;

/// `GET /` handler.
///
/// Takes no extractors, so headers, query string and body have no influence
/// on the response.
pub async fn index() -> &'static str {
    DEPLOYMENT_MESSAGE
}
