use chrono::NaiveDateTime;

use crate::db::models::{DeliveryEvent, EventGap, TimeEffectivenessReport};

/// Minutes between two instants as a float (millisecond resolution).
fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    to.signed_duration_since(from).num_milliseconds() as f64 / 60_000.0
}

/// Compute working-time statistics over the timestamped events of one
/// result set.
///
/// Events without a timestamp are excluded up front; they still count in
/// the resume but carry no position in the working-day sequence. The
/// remaining events are sorted internally, so caller order never affects
/// the report. Ties on the timestamp break on the tracking id to keep the
/// gap listing deterministic.
///
/// The report contains:
/// - start and end of the sequence
/// - total duration in minutes
/// - average minutes per event (duration / analyzed event count)
/// - per-event gap to its predecessor, `0.0` for the first event
pub fn compute_time_effectiveness(events: &[DeliveryEvent]) -> TimeEffectivenessReport {
    let mut timed: Vec<(&DeliveryEvent, NaiveDateTime)> = events
        .iter()
        .filter_map(|e| e.event_time.map(|t| (e, t)))
        .collect();

    let skipped = events.len() - timed.len();
    if skipped > 0 {
        log::debug!(
            "Excluded {} of {} events without timestamp from time analysis",
            skipped,
            events.len()
        );
    }

    if timed.is_empty() {
        return TimeEffectivenessReport::empty();
    }

    timed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.tracking_id.cmp(&b.0.tracking_id)));

    let start_time = timed[0].1;
    let end_time = timed[timed.len() - 1].1;
    let duration_minutes = minutes_between(start_time, end_time);
    let analyzed_count = timed.len();

    let mut gaps = Vec::with_capacity(analyzed_count);
    let mut previous: Option<NaiveDateTime> = None;
    for (event, time) in &timed {
        let gap_minutes = match previous {
            Some(prev) => minutes_between(prev, *time),
            None => 0.0,
        };
        gaps.push(EventGap {
            tracking_id: event.tracking_id.clone(),
            event_time: *time,
            gap_minutes,
        });
        previous = Some(*time);
    }

    TimeEffectivenessReport {
        start_time: Some(start_time),
        end_time: Some(end_time),
        duration_minutes,
        average_minutes: duration_minutes / analyzed_count as f64,
        analyzed_count,
        gaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(tracking: &str, time: Option<&str>) -> DeliveryEvent {
        DeliveryEvent {
            tracking_id: tracking.to_string(),
            product_code: None,
            shipment_type: None,
            raw_status: Some("DELIVERED".to_string()),
            courier_id: "P001".to_string(),
            office_id: "40115".to_string(),
            recipient_name: None,
            recipient_address: None,
            note: None,
            event_time: time
                .map(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()),
            location: None,
        }
    }

    #[test]
    fn empty_events_yield_zeroed_report() {
        let report = compute_time_effectiveness(&[]);
        assert_eq!(report, TimeEffectivenessReport::empty());
        assert!(report.start_time.is_none());
        assert!(report.gaps.is_empty());
    }

    #[test]
    fn untimestamped_events_are_excluded() {
        let events = vec![event("CN001", None), event("CN002", None)];
        let report = compute_time_effectiveness(&events);
        assert_eq!(report, TimeEffectivenessReport::empty());

        let mixed = vec![
            event("CN001", None),
            event("CN002", Some("2024-03-01 08:00:00")),
        ];
        let report = compute_time_effectiveness(&mixed);
        assert_eq!(report.analyzed_count, 1);
    }

    #[test]
    fn single_event_has_zero_duration_and_one_gap() {
        let events = vec![event("CN001", Some("2024-03-01 08:00:00"))];
        let report = compute_time_effectiveness(&events);

        assert_eq!(report.analyzed_count, 1);
        assert_eq!(report.duration_minutes, 0.0);
        assert_eq!(report.average_minutes, 0.0);
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].gap_minutes, 0.0);
        assert_eq!(report.start_time, report.end_time);
    }

    #[test]
    fn gaps_and_average_over_a_working_morning() {
        let events = vec![
            event("CN001", Some("2024-03-01 08:00:00")),
            event("CN002", Some("2024-03-01 08:20:00")),
            event("CN003", Some("2024-03-01 09:00:00")),
        ];

        let report = compute_time_effectiveness(&events);
        assert_eq!(report.duration_minutes, 60.0);
        assert_eq!(report.average_minutes, 20.0);
        assert_eq!(report.analyzed_count, 3);

        let gaps: Vec<f64> = report.gaps.iter().map(|g| g.gap_minutes).collect();
        assert_eq!(gaps, vec![0.0, 20.0, 40.0]);
    }

    #[test]
    fn input_order_does_not_change_the_report() {
        let sorted = vec![
            event("CN001", Some("2024-03-01 08:00:00")),
            event("CN002", Some("2024-03-01 08:20:00")),
            event("CN003", Some("2024-03-01 09:00:00")),
        ];
        let shuffled = vec![sorted[2].clone(), sorted[0].clone(), sorted[1].clone()];

        assert_eq!(
            compute_time_effectiveness(&sorted),
            compute_time_effectiveness(&shuffled)
        );
    }

    #[test]
    fn timestamp_ties_break_on_tracking_id() {
        let events = vec![
            event("CN002", Some("2024-03-01 08:00:00")),
            event("CN001", Some("2024-03-01 08:00:00")),
        ];

        let report = compute_time_effectiveness(&events);
        assert_eq!(report.gaps[0].tracking_id, "CN001");
        assert_eq!(report.gaps[1].tracking_id, "CN002");
        assert_eq!(report.gaps[1].gap_minutes, 0.0);
        assert_eq!(report.duration_minutes, 0.0);
    }

    #[test]
    fn fractional_minutes_are_kept() {
        let events = vec![
            event("CN001", Some("2024-03-01 08:00:00")),
            event("CN002", Some("2024-03-01 08:00:30")),
        ];

        let report = compute_time_effectiveness(&events);
        assert_eq!(report.duration_minutes, 0.5);
        assert_eq!(report.gaps[1].gap_minutes, 0.5);
    }
}
