//! Price and category distributions
//!
//! # Price buckets
//!
//! | label | test |
//! |-------|------|
//! | 0-100 | `0 <= price < 100` |
//! | 101-200 | `101 <= price < 200` |
//! | ... | ... |
//! | 801-900 | `801 <= price < 900` |
//! | 901-above | `901 <= price` |
//!
//! Lower bounds start one above the previous upper bound while upper bounds
//! are exclusive, so prices in `[100, 101)`, `[200, 201)` ... `[900, 901)`
//! fall in no bucket. Dashboards built against these labels expect exactly
//! this behaviour; the gap is kept.

use futures::future::try_join_all;
use shared::{CategoryCount, Month, PriceBucketCount};

use crate::db::{PriceRange, TransactionFilter, TransactionStore};
use crate::utils::AppResult;

/// One histogram bucket: `min <= price < max`, open-ended without `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub min: u32,
    pub max: Option<u32>,
}

impl PriceBucket {
    const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}-above", self.min),
        }
    }

    pub fn range(&self) -> PriceRange {
        PriceRange {
            min: f64::from(self.min),
            max: self.max.map(f64::from),
        }
    }
}

pub const PRICE_BUCKETS: [PriceBucket; 10] = [
    PriceBucket::new(0, 100),
    PriceBucket::new(101, 200),
    PriceBucket::new(201, 300),
    PriceBucket::new(301, 400),
    PriceBucket::new(401, 500),
    PriceBucket::new(501, 600),
    PriceBucket::new(601, 700),
    PriceBucket::new(701, 800),
    PriceBucket::new(801, 900),
    PriceBucket {
        min: 901,
        max: None,
    },
];

/// Count of `month` records per price bucket, all ten buckets in fixed order
pub async fn price_histogram(
    store: &dyn TransactionStore,
    month: Option<Month>,
) -> AppResult<Vec<PriceBucketCount>> {
    let base = TransactionFilter::for_month(month);
    let counts = try_join_all(PRICE_BUCKETS.iter().map(|bucket| {
        let filter = base.clone().with_price(bucket.range());
        async move { store.count(&filter).await }
    }))
    .await?;

    Ok(PRICE_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| PriceBucketCount {
            range: bucket.label(),
            count,
        })
        .collect())
}

/// Count of `month` records per distinct category
pub async fn category_breakdown(
    store: &dyn TransactionStore,
    month: Option<Month>,
) -> AppResult<Vec<CategoryCount>> {
    let filter = TransactionFilter::for_month(month);
    Ok(store.count_by_category(&filter).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<String> = PRICE_BUCKETS.iter().map(PriceBucket::label).collect();
        assert_eq!(
            labels,
            vec![
                "0-100", "101-200", "201-300", "301-400", "401-500", "501-600", "601-700",
                "701-800", "801-900", "901-above"
            ]
        );
    }

    #[test]
    fn test_bucket_filters_leave_a_gap() {
        for pair in PRICE_BUCKETS.windows(2) {
            let upper = pair[0].range().max.unwrap();
            let next_min = pair[1].range().min;
            assert_eq!(next_min - upper, 1.0, "{} -> {}", pair[0].label(), pair[1].label());
        }
    }

    #[test]
    fn test_bucket_filter_clause() {
        let clause = TransactionFilter::for_month(Month::new(3))
            .with_price(PRICE_BUCKETS[1].range())
            .to_surql();
        assert!(clause.sql.ends_with("price >= $price_min AND price < $price_max"));
        assert!(clause.binds.contains(&("price_min", Value::from(101.0))));
        assert!(clause.binds.contains(&("price_max", Value::from(200.0))));

        let top = TransactionFilter::for_month(Month::new(3))
            .with_price(PRICE_BUCKETS[9].range())
            .to_surql();
        assert!(top.sql.ends_with("price >= $price_min"));
        assert!(!top.binds.iter().any(|(name, _)| *name == "price_max"));
    }

    #[test]
    fn test_range_mirrors_bucket() {
        let top = PRICE_BUCKETS[9].range();
        assert_eq!(top.min, 901.0);
        assert_eq!(top.max, None);
        assert_eq!(PRICE_BUCKETS[1].range().max, Some(200.0));
    }
}
