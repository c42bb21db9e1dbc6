//! Feature extraction from raw transaction history.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Categories treated as necessity-driven spending.
static ESSENTIAL_CATEGORIES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["groceries", "utilities", "food"].into_iter().collect());

/// Categories treated as optional spending.
static DISCRETIONARY_CATEGORIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["entertainment", "dining", "shopping"]
        .into_iter()
        .collect()
});

/// A single spending record as submitted by the client.
///
/// The schema is deliberately lenient: a present but non-numeric `amount`
/// coerces to zero and an absent `category` contributes to neither spending
/// bucket, so arbitrary client payloads can never fail extraction. An absent
/// `amount` field stays `None`; extraction checks for histories with no
/// amounts at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<String>,
}

impl TransactionRecord {
    /// Convenience constructor used by tests and fixtures.
    pub fn new(amount: f64, category: Option<&str>) -> Self {
        Self {
            amount: Some(amount),
            category: category.map(str::to_string),
        }
    }
}

/// Accepts a JSON number, a numeric string, or anything else (coerced to 0).
/// Only a missing field yields `None`, via the serde default.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }))
}

/// Accepts a JSON string; anything else counts as no category.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Fixed-length feature vector summarizing a spending history.
///
/// The essential/discretionary ratios divide a record count by a monetary
/// sum (floored at 1). The mismatched units are inherited behavior the
/// clustering model was fitted against, so they are part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpendingFeatures {
    pub total_spending: f64,
    pub avg_transaction: f64,
    pub transaction_count: f64,
    pub spending_std_dev: f64,
    pub essential_count: f64,
    pub discretionary_count: f64,
    pub essential_ratio: f64,
    pub discretionary_ratio: f64,
}

impl SpendingFeatures {
    /// Returns the features as the ordered 8-element vector consumed by the
    /// scaler and clustering model.
    pub fn to_vector(&self) -> [f64; 8] {
        [
            self.total_spending,
            self.avg_transaction,
            self.transaction_count,
            self.spending_std_dev,
            self.essential_count,
            self.discretionary_count,
            self.essential_ratio,
            self.discretionary_ratio,
        ]
    }
}

/// Extracts the 8-element feature vector from a spending history.
///
/// Total function: an empty history, or one where no record carries an
/// `amount` field, yields the all-zero vector. The sample standard deviation
/// is 0 for fewer than two records, and unknown categories are ignored.
pub fn extract_features(records: &[TransactionRecord]) -> SpendingFeatures {
    if records.iter().all(|r| r.amount.is_none()) {
        return SpendingFeatures::default();
    }

    let count = records.len();
    let amount = |r: &TransactionRecord| r.amount.unwrap_or(0.0);
    let total: f64 = records.iter().map(amount).sum();
    let mean = total / count as f64;

    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = records
            .iter()
            .map(|r| (amount(r) - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        let sd = variance.sqrt();
        if sd.is_finite() {
            sd
        } else {
            0.0
        }
    };

    let mut essential = 0u32;
    let mut discretionary = 0u32;
    for record in records {
        if let Some(category) = record.category.as_deref() {
            if ESSENTIAL_CATEGORIES.contains(category) {
                essential += 1;
            } else if DISCRETIONARY_CATEGORIES.contains(category) {
                discretionary += 1;
            }
        }
    }

    let denominator = total.max(1.0);

    SpendingFeatures {
        total_spending: total,
        avg_transaction: mean,
        transaction_count: count as f64,
        spending_std_dev: std_dev,
        essential_count: f64::from(essential),
        discretionary_count: f64::from(discretionary),
        essential_ratio: f64::from(essential) / denominator,
        discretionary_ratio: f64::from(discretionary) / denominator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_yields_all_zero_vector() {
        let features = extract_features(&[]);
        assert_eq!(features.to_vector(), [0.0; 8]);
    }

    #[test]
    fn history_without_any_amounts_yields_all_zero_vector() {
        // Category-only records carry no amount field; the whole history is
        // treated as empty, so nothing is counted.
        let records: Vec<TransactionRecord> = serde_json::from_value(serde_json::json!([
            { "category": "dining" },
            { "category": "groceries" }
        ]))
        .unwrap();

        let features = extract_features(&records);
        assert_eq!(features.to_vector(), [0.0; 8]);
    }

    #[test]
    fn present_amount_fields_keep_records_counted() {
        // A single explicit amount, even a junk one coerced to zero, means
        // the history is not amount-free.
        let records: Vec<TransactionRecord> = serde_json::from_value(serde_json::json!([
            { "amount": "junk", "category": "dining" },
            { "category": "groceries" }
        ]))
        .unwrap();

        let features = extract_features(&records);
        assert_eq!(features.transaction_count, 2.0);
        assert_eq!(features.essential_count, 1.0);
        assert_eq!(features.discretionary_count, 1.0);
    }

    #[test]
    fn single_record_has_zero_std_dev() {
        let features = extract_features(&[TransactionRecord::new(120.0, None)]);
        assert_eq!(features.total_spending, 120.0);
        assert_eq!(features.avg_transaction, 120.0);
        assert_eq!(features.transaction_count, 1.0);
        assert_eq!(features.spending_std_dev, 0.0);
    }

    #[test]
    fn category_counts_use_records_not_amounts() {
        let records = vec![
            TransactionRecord::new(50.0, Some("groceries")),
            TransactionRecord::new(2000.0, Some("shopping")),
        ];
        let features = extract_features(&records);

        assert_eq!(features.total_spending, 2050.0);
        assert_eq!(features.avg_transaction, 1025.0);
        assert_eq!(features.essential_count, 1.0);
        assert_eq!(features.discretionary_count, 1.0);
    }

    #[test]
    fn ratios_divide_count_by_monetary_total() {
        // Inherited contract: count numerator over monetary denominator.
        let records = vec![
            TransactionRecord::new(100.0, Some("groceries")),
            TransactionRecord::new(100.0, Some("utilities")),
        ];
        let features = extract_features(&records);
        assert_eq!(features.essential_ratio, 2.0 / 200.0);
        assert_eq!(features.discretionary_ratio, 0.0);
    }

    #[test]
    fn ratio_denominator_is_floored_at_one() {
        let records = vec![TransactionRecord::new(0.0, Some("dining"))];
        let features = extract_features(&records);
        assert_eq!(features.discretionary_ratio, 1.0);
    }

    #[test]
    fn unknown_categories_are_ignored() {
        let records = vec![
            TransactionRecord::new(10.0, Some("travel")),
            TransactionRecord::new(10.0, None),
        ];
        let features = extract_features(&records);
        assert_eq!(features.essential_count, 0.0);
        assert_eq!(features.discretionary_count, 0.0);
    }

    #[test]
    fn sample_std_dev_uses_n_minus_one() {
        let records = vec![
            TransactionRecord::new(10.0, None),
            TransactionRecord::new(20.0, None),
            TransactionRecord::new(30.0, None),
        ];
        let features = extract_features(&records);
        assert!((features.spending_std_dev - 10.0).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_amounts_coerce_to_zero() {
        let records: Vec<TransactionRecord> = serde_json::from_value(serde_json::json!([
            { "amount": "not-a-number", "category": "groceries" },
            { "amount": null },
            { "category": "shopping" },
            { "amount": "25.5", "category": 7 },
            { "amount": 4.5 }
        ]))
        .unwrap();

        let features = extract_features(&records);
        assert_eq!(features.total_spending, 30.0);
        assert_eq!(features.transaction_count, 5.0);
    }
}
