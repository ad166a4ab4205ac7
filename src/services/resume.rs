use std::collections::HashMap;

use crate::db::models::{DeliveryEvent, DeliveryOutcome, DeliveryResume, ProductResume};
use crate::services::status::classify_event;

/// Share of `count` within `total` as a percentage.
/// An empty total yields `0.0`, never a division error.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Running outcome tally for one group of events.
#[derive(Default)]
struct OutcomeCounts {
    total: usize,
    delivered: usize,
    failed: usize,
    other: usize,
}

impl OutcomeCounts {
    fn tally(&mut self, outcome: DeliveryOutcome) {
        self.total += 1;
        match outcome {
            DeliveryOutcome::Delivered => self.delivered += 1,
            DeliveryOutcome::Failed => self.failed += 1,
            DeliveryOutcome::Other => self.other += 1,
        }
    }

    fn into_product(self, product_code: String) -> ProductResume {
        ProductResume {
            product_code,
            pct_delivered: percentage(self.delivered, self.total),
            pct_failed: percentage(self.failed, self.total),
            pct_other: percentage(self.other, self.total),
            total: self.total,
            delivered: self.delivered,
            failed: self.failed,
            other: self.other,
        }
    }
}

/// Compute the delivery resume: overall outcome counts, percentages and the
/// per-product breakdown.
///
/// Every event counts exactly once. Events without a product code form
/// their own group under the empty string. Percentages divide by the full
/// group total, so delivered, failed and other shares always partition
/// 100% (or are all zero for an empty set).
pub fn compute_delivery_resume(events: &[DeliveryEvent]) -> DeliveryResume {
    if events.is_empty() {
        return DeliveryResume::empty();
    }

    let mut overall = OutcomeCounts::default();
    let mut by_product: HashMap<String, OutcomeCounts> = HashMap::new();

    for event in events {
        let outcome = classify_event(event);
        overall.tally(outcome);

        let code = event.product_code.clone().unwrap_or_default();
        by_product.entry(code).or_default().tally(outcome);
    }

    // Deterministic product order regardless of event order
    let mut products: Vec<ProductResume> = by_product
        .into_iter()
        .map(|(code, counts)| counts.into_product(code))
        .collect();
    products.sort_by(|a, b| a.product_code.cmp(&b.product_code));

    DeliveryResume {
        pct_delivered: percentage(overall.delivered, overall.total),
        pct_failed: percentage(overall.failed, overall.total),
        pct_other: percentage(overall.other, overall.total),
        total: overall.total,
        delivered: overall.delivered,
        failed: overall.failed,
        other: overall.other,
        products,
    }
}
