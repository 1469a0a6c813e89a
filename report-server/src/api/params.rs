//! Query-string parameters shared by the report endpoints

use serde::Deserialize;
use shared::Month;

use crate::services::resolve_month;

/// `?month=March`
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

impl MonthQuery {
    /// Resolved month; `None` (logged) when missing or unknown
    pub fn resolve(&self) -> Option<Month> {
        resolve_month(self.month.as_deref())
    }
}
