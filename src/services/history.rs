use chrono::NaiveDate;

use crate::db::get_repository;
use crate::db::models::{ClassifiedEvent, DeliveryEvent, DeliveryHistoryBundle, GeoPoint};
use crate::services::resume::compute_delivery_resume;
use crate::services::status::classify_event;
use crate::services::time_effectiveness::compute_time_effectiveness;

/// Mean position of the located events, `None` when none carry one.
fn compute_map_center(events: &[DeliveryEvent]) -> Option<GeoPoint> {
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    let mut located = 0usize;

    for event in events {
        if let Some(location) = event.location {
            lat_sum += location.latitude;
            lon_sum += location.longitude;
            located += 1;
        }
    }

    if located == 0 {
        return None;
    }

    Some(GeoPoint::new(
        lat_sum / located as f64,
        lon_sum / located as f64,
    ))
}

/// Compute the complete delivery-history bundle from a materialized event set.
///
/// One call produces everything the history page renders: classified event
/// rows (input order preserved), the per-product resume, the time
/// effectiveness report and the map center. An empty event set yields an
/// empty bundle, not an error.
pub fn compute_delivery_history(
    events: Vec<DeliveryEvent>,
) -> Result<DeliveryHistoryBundle, String> {
    let resume = compute_delivery_resume(&events);
    let time_effectiveness = compute_time_effectiveness(&events);
    let map_center = compute_map_center(&events);

    let classified: Vec<ClassifiedEvent> = events
        .into_iter()
        .map(|event| {
            let outcome = classify_event(&event);
            ClassifiedEvent { event, outcome }
        })
        .collect();

    Ok(DeliveryHistoryBundle {
        total_count: resume.total,
        delivered_count: resume.delivered,
        failed_count: resume.failed,
        other_count: resume.other,
        events: classified,
        resume,
        time_effectiveness,
        map_center,
    })
}

/// Get the delivery-history bundle for one courier, office and day.
/// This function orchestrates fetching the events from the repository and
/// running the full analysis over them.
pub async fn get_delivery_history_data(
    courier_id: &str,
    office_id: &str,
    date: NaiveDate,
) -> Result<DeliveryHistoryBundle, String> {
    let repo = get_repository().map_err(|e| format!("Failed to get repository: {}", e))?;

    let events = repo
        .fetch_delivery_events(courier_id, office_id, date)
        .await
        .map_err(|e| format!("Failed to fetch delivery events: {}", e))?;

    compute_delivery_history(events)
}
