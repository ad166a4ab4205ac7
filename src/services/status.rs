use crate::db::models::{DeliveryEvent, DeliveryOutcome};

/// Classify a raw delivery status into its canonical outcome.
///
/// The decision table, applied to the trimmed, uppercased status:
/// 1. missing status -> `Other`
/// 2. exactly `"DELIVERED"` -> `Delivered`
/// 3. `"FAILED"` anywhere in the string -> `Failed`
/// 4. anything else -> `Other`
///
/// The substring rule wins over every other token, so compound statuses
/// like `FAILED_DELIVERED_RETRY` classify as `Failed`.
///
/// # Examples
///
/// ```
/// use antaran_rust::db::models::DeliveryOutcome;
/// use antaran_rust::services::status::classify_status;
///
/// assert_eq!(classify_status(Some(" delivered ")), DeliveryOutcome::Delivered);
/// assert_eq!(classify_status(Some("FAILED_ADDRESS_NOT_FOUND")), DeliveryOutcome::Failed);
/// assert_eq!(classify_status(Some("WITH_COURIER")), DeliveryOutcome::Other);
/// assert_eq!(classify_status(None), DeliveryOutcome::Other);
/// ```
pub fn classify_status(raw_status: Option<&str>) -> DeliveryOutcome {
    let Some(raw) = raw_status else {
        return DeliveryOutcome::Other;
    };

    let normalized = raw.trim().to_uppercase();
    if normalized == "DELIVERED" {
        DeliveryOutcome::Delivered
    } else if normalized.contains("FAILED") {
        DeliveryOutcome::Failed
    } else {
        DeliveryOutcome::Other
    }
}

/// Classify one event by its recorded raw status.
pub fn classify_event(event: &DeliveryEvent) -> DeliveryOutcome {
    classify_status(event.raw_status.as_deref())
}
