use serde::{Deserialize, Serialize};

/// JSON body returned by the catalog API for every non-2xx response.
///
/// The frontend shows `error` verbatim as the page-level save error, so it
/// should be short and human readable (e.g. `"Title is required."`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
