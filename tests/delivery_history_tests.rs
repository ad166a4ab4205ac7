//! End-to-end tests for the delivery-history analytics.
//!
//! A courier's morning: two deliveries and one failed attempt, spread over
//! one hour, on two postal products. The same scenario runs through the
//! materialized path (payload in, bundle out) and the repository-backed
//! path (seed, then fetch by courier/office/date).

use antaran_rust::api::types::DeliveryHistoryData;
use antaran_rust::db::models::DeliveryOutcome;
use antaran_rust::parsing::parse_delivery_events_str;
use antaran_rust::services;
use chrono::NaiveDate;

const MORNING_PAYLOAD: &str = r#"[
    {
        "connote": "CN001",
        "produk": "PKH",
        "status_antaran": "DELIVERED",
        "id_petugas": "P777",
        "id_kantor": "40777",
        "waktu_kejadian": "2024-03-01 08:00:00",
        "latitude": -6.90,
        "longitude": 107.60
    },
    {
        "connote": "CN002",
        "produk": "PKH",
        "status_antaran": "FAILED_ADDRESS",
        "id_petugas": "P777",
        "id_kantor": "40777",
        "waktu_kejadian": "2024-03-01 08:20:00",
        "latitude": -6.92,
        "longitude": 107.64
    },
    {
        "connote": "CN003",
        "produk": "QCOM",
        "status_antaran": "DELIVERED",
        "id_petugas": "P777",
        "id_kantor": "40777",
        "waktu_kejadian": "2024-03-01 09:00:00"
    }
]"#;

fn assert_morning_bundle(bundle: &antaran_rust::db::models::DeliveryHistoryBundle) {
    // Overall counts
    assert_eq!(bundle.total_count, 3);
    assert_eq!(bundle.delivered_count, 2);
    assert_eq!(bundle.failed_count, 1);
    assert_eq!(bundle.other_count, 0);

    // Classified rows in input order
    let outcomes: Vec<DeliveryOutcome> = bundle.events.iter().map(|e| e.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            DeliveryOutcome::Delivered,
            DeliveryOutcome::Failed,
            DeliveryOutcome::Delivered
        ]
    );

    // Per-product breakdown, alphabetical
    assert_eq!(bundle.resume.products.len(), 2);
    let pkh = &bundle.resume.products[0];
    assert_eq!(pkh.product_code, "PKH");
    assert_eq!((pkh.total, pkh.delivered, pkh.failed), (2, 1, 1));
    assert!((pkh.pct_delivered - 50.0).abs() < 1e-9);
    assert!((pkh.pct_failed - 50.0).abs() < 1e-9);
    let qcom = &bundle.resume.products[1];
    assert_eq!(qcom.product_code, "QCOM");
    assert!((qcom.pct_delivered - 100.0).abs() < 1e-9);

    // Time effectiveness: one hour of work, three events
    let report = &bundle.time_effectiveness;
    assert_eq!(report.analyzed_count, 3);
    assert!((report.duration_minutes - 60.0).abs() < 1e-9);
    assert!((report.average_minutes - 20.0).abs() < 1e-9);
    let gaps: Vec<f64> = report.gaps.iter().map(|g| g.gap_minutes).collect();
    assert_eq!(gaps, vec![0.0, 20.0, 40.0]);

    // Map center averages the two located events
    let center = bundle.map_center.expect("two events carry positions");
    assert!((center.latitude - (-6.91)).abs() < 1e-9);
    assert!((center.longitude - 107.62).abs() < 1e-9);
}

#[test]
fn morning_route_materialized_path() {
    let events = parse_delivery_events_str(MORNING_PAYLOAD).unwrap();
    let bundle = services::compute_delivery_history(events).unwrap();
    assert_morning_bundle(&bundle);
}

#[tokio::test]
async fn morning_route_repository_path() {
    antaran_rust::db::init_repository().unwrap();
    let repo = antaran_rust::db::get_repository().unwrap();

    let events = parse_delivery_events_str(MORNING_PAYLOAD).unwrap();
    let stored = repo.store_delivery_events(&events).await.unwrap();
    assert_eq!(stored, 3);

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let bundle = services::get_delivery_history_data("P777", "40777", date)
        .await
        .unwrap();
    assert_morning_bundle(&bundle);

    // A different day for the same courier is empty, not an error
    let other_day = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
    let empty = services::get_delivery_history_data("P777", "40777", other_day)
        .await
        .unwrap();
    assert_eq!(empty.total_count, 0);
    assert!(empty.events.is_empty());
}

#[test]
fn morning_route_api_dataset() {
    let events = parse_delivery_events_str(MORNING_PAYLOAD).unwrap();
    let bundle = services::compute_delivery_history(events).unwrap();

    let data = DeliveryHistoryData::from(&bundle);
    assert_eq!(data.total_count, 3);
    assert_eq!(data.events.len(), 3);
    assert_eq!(data.events[0].outcome, "DELIVERED");
    assert_eq!(data.events[0].marker_color, "green");
    assert_eq!(data.events[1].outcome, "FAILED");
    assert_eq!(data.events[1].marker_color, "red");
    assert_eq!(
        data.events[0].event_time.as_deref(),
        Some("2024-03-01T08:00:00")
    );
    assert_eq!(
        data.time_effectiveness.start_time.as_deref(),
        Some("2024-03-01T08:00:00")
    );
    assert_eq!(
        data.time_effectiveness.end_time.as_deref(),
        Some("2024-03-01T09:00:00")
    );
    assert_eq!(data.center_latitude, Some(-6.91));
    assert_eq!(data.resume.products[0].product_code, "PKH");
}
