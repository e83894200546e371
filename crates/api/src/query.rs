//! Shared list-endpoint query parameters.

use kadro_core::filter::FilterSpec;
use kadro_core::types::DbId;
use serde::Deserialize;

/// Query string accepted by filterable list endpoints
/// (`?employee_id=&status=&kind=&search=`). Unknown statuses and kinds simply
/// match nothing; the filter compares labels verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub employee_id: Option<DbId>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub search: Option<String>,
}

impl FilterQuery {
    pub fn into_spec(self) -> FilterSpec {
        FilterSpec {
            employee_id: self.employee_id,
            status: self.status,
            kind: self.kind,
            search: self.search,
        }
    }
}
