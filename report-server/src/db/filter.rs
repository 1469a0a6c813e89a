//! Transaction filter
//!
//! Services describe *which* records they want with a [`TransactionFilter`];
//! the store decides *how* to evaluate it. The SurrealDB store renders it
//! to a `WHERE` clause with bound parameters, never by string interpolation
//! of user input.

use serde_json::Value;
use shared::Month;

/// Month part of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthScope {
    /// No month restriction
    Any,
    /// Sale date falls in this calendar month, any year
    In(Month),
    /// The caller asked for a month we could not resolve; matches nothing
    Unresolved,
}

/// Free-text search over title, description and (when numeric) price
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTerm {
    /// Lowercased needle for substring matching
    needle: String,
    /// Exact price to match, only when the term parses as a finite number
    price: Option<f64>,
}

impl SearchTerm {
    /// Returns `None` for empty input. The needle keeps the raw text
    /// (whitespace included); only the numeric check ignores padding.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let price = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite());
        Some(Self {
            needle: raw.to_lowercase(),
            price,
        })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }
}

/// Half-open price interval: `min <= price < max`, unbounded when `max` is `None`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

/// Rendered `WHERE` clause plus the parameters it references
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// Either empty or starts with `" WHERE "`
    pub sql: String,
    pub binds: Vec<(&'static str, Value)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    month: MonthScope,
    search: Option<SearchTerm>,
    sold: Option<bool>,
    price: Option<PriceRange>,
}

impl TransactionFilter {
    /// Every record in the store
    pub fn all() -> Self {
        Self {
            month: MonthScope::Any,
            search: None,
            sold: None,
            price: None,
        }
    }

    /// Records sold in `month`; an unresolved month matches nothing
    pub fn for_month(month: Option<Month>) -> Self {
        Self {
            month: month.map_or(MonthScope::Unresolved, MonthScope::In),
            ..Self::all()
        }
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.search = SearchTerm::parse(raw);
        self
    }

    pub fn with_sold(mut self, sold: bool) -> Self {
        self.sold = Some(sold);
        self
    }

    pub fn with_price(mut self, range: PriceRange) -> Self {
        self.price = Some(range);
        self
    }

    pub fn month(&self) -> MonthScope {
        self.month
    }

    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// True when the store can skip the query entirely
    pub fn matches_nothing(&self) -> bool {
        self.month == MonthScope::Unresolved
    }

    /// Render as SurrealQL against the `sale_transaction` row layout
    pub fn to_surql(&self) -> WhereClause {
        let mut conditions: Vec<String> = Vec::new();
        let mut binds: Vec<(&'static str, Value)> = Vec::new();

        match self.month {
            MonthScope::Any => {}
            MonthScope::In(month) => {
                conditions.push("sale_month = $month".to_string());
                binds.push(("month", Value::from(month.number())));
            }
            // never queried, see matches_nothing
            MonthScope::Unresolved => conditions.push("false".to_string()),
        }

        if let Some(search) = &self.search {
            let mut any_of = vec![
                "string::contains(string::lowercase(title), $needle)",
                "string::contains(string::lowercase(description), $needle)",
            ];
            binds.push(("needle", Value::from(search.needle.clone())));
            if let Some(price) = search.price {
                any_of.push("price = $search_price");
                binds.push(("search_price", Value::from(price)));
            }
            conditions.push(format!("({})", any_of.join(" OR ")));
        }

        if let Some(sold) = self.sold {
            conditions.push("sold = $sold".to_string());
            binds.push(("sold", Value::from(sold)));
        }

        if let Some(range) = self.price {
            conditions.push("price >= $price_min".to_string());
            binds.push(("price_min", Value::from(range.min)));
            if let Some(max) = range.max {
                conditions.push("price < $price_max".to_string());
                binds.push(("price_max", Value::from(max)));
            }
        }

        let sql = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        WhereClause { sql, binds }
    }
}
