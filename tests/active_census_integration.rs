//! Integration tests for the active-member census.
//!
//! These tests drive the statistics handlers end to end over the in-memory
//! adapters:
//! 1. Point-in-time census (inclusive day boundaries, lapsed records, filters)
//! 2. Sampled series over long ranges
//! 3. Daily snapshots feeding the growth report
//! 4. Storage outages surfacing as StorageUnavailable

use chrono::NaiveDate;
use std::sync::Arc;

use pro_members_manager::adapters::{
    InMemoryMetadataTable, InMemoryOrderBook, InMemorySnapshotRepository,
};
use pro_members_manager::application::{
    select_record_source, BuildActiveSeriesQuery, CountActiveMembersQuery, CountRecordsQuery,
    GetMembershipGrowthQuery, RecordDailySnapshotCommand, StatisticsHandlers,
};
use pro_members_manager::config::{RecordSourceKind, StatisticsConfig};
use pro_members_manager::domain::foundation::{RecordId, UserId};
use pro_members_manager::domain::membership::{CategoryCode, MembershipRecord, ProductCatalog};
use pro_members_manager::domain::statistics::{
    ActiveCounts, GrowthPeriod, SamplingPlan, StatisticsError,
};
use pro_members_manager::ports::{CommerceOrder, OrderItem};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn record(id: u64, code: u32, start: &str, end: Option<&str>) -> MembershipRecord {
    MembershipRecord {
        id: RecordId::new(id),
        user_id: UserId::from_raw(id),
        category_code: CategoryCode::new(code),
        status: "active".to_string(),
        start_date: start.to_string(),
        end_date: end.map(String::from),
        created_at: start.to_string(),
        postcode: Some("4293".to_string()),
    }
}

struct Fixture {
    table: Arc<InMemoryMetadataTable>,
    snapshots: Arc<InMemorySnapshotRepository>,
    handlers: StatisticsHandlers,
}

fn fixture(records: Vec<MembershipRecord>) -> Fixture {
    let table = Arc::new(InMemoryMetadataTable::with_records(records));
    let snapshots = Arc::new(InMemorySnapshotRepository::new());
    let handlers = StatisticsHandlers::new(
        &StatisticsConfig::default(),
        Arc::new(ProductCatalog::default()),
        table.clone(),
        snapshots.clone(),
    );
    Fixture {
        table,
        snapshots,
        handlers,
    }
}

async fn census(fixture: &Fixture, day: &str, member_type: Option<&str>) -> ActiveCounts {
    let mut query = CountActiveMembersQuery::on(date(day));
    if let Some(member_type) = member_type {
        query = query.with_member_type(member_type);
    }
    fixture.handlers.count_active.handle(query).await.unwrap()
}

// =============================================================================
// Point-in-time census
// =============================================================================

#[tokio::test]
async fn single_open_ended_private_record() {
    let fixture = fixture(vec![record(1, 9503, "2024-01-01 00:00:00", None)]);

    assert_eq!(
        census(&fixture, "2024-06-15", None).await,
        ActiveCounts {
            total: 1,
            private: 1,
            pension: 0,
            union: 0,
        }
    );
    assert!(census(&fixture, "2023-12-31", None).await.is_zero());
}

#[tokio::test]
async fn lapsed_union_record_counts_through_last_day() {
    let fixture = fixture(vec![record(
        1,
        19221,
        "2024-01-01 00:00:00",
        Some("2024-06-30 00:00:00"),
    )]);

    assert_eq!(census(&fixture, "2024-06-30", None).await.union, 1);
    assert_eq!(census(&fixture, "2024-07-01", None).await.union, 0);
}

#[tokio::test]
async fn pension_filter_over_private_record_is_zero() {
    let fixture = fixture(vec![record(1, 9503, "2024-01-01 00:00:00", None)]);

    let counts = census(&fixture, "2024-06-15", Some("pension")).await;
    assert_eq!(counts.total, 0);
    assert!(counts.is_zero());
}

#[tokio::test]
async fn single_day_membership_counts_only_on_that_day() {
    let fixture = fixture(vec![record(
        1,
        28736,
        "2024-03-10 08:00:00",
        Some("2024-03-10 17:00:00"),
    )]);

    assert_eq!(census(&fixture, "2024-03-09", None).await.total, 0);
    assert_eq!(census(&fixture, "2024-03-10", None).await.pension, 1);
    assert_eq!(census(&fixture, "2024-03-11", None).await.total, 0);
}

#[tokio::test]
async fn status_change_removes_record_from_census() {
    let fixture = fixture(vec![
        record(1, 9503, "2024-01-01 00:00:00", None),
        record(2, 30734, "2024-01-01 00:00:00", None),
    ]);
    fixture.table.set_status(RecordId::new(2), "on-hold").await;

    let counts = census(&fixture, "2024-06-15", None).await;
    assert_eq!(counts.total, 1);
    assert_eq!(counts.union, 0);
}

#[tokio::test]
async fn malformed_record_is_stored_but_never_active() {
    let fixture = fixture(vec![
        record(1, 9503, "2024-01-01 00:00:00", None),
        record(2, 9503, "01.01.2024", None),
    ]);

    assert_eq!(census(&fixture, "2024-06-15", None).await.total, 1);
    let stored = fixture
        .handlers
        .count_records
        .handle(CountRecordsQuery)
        .await
        .unwrap();
    assert_eq!(stored, 2);
}

#[tokio::test]
async fn commerce_orders_source_feeds_the_same_census() {
    let order = CommerceOrder {
        id: RecordId::new(501),
        customer_id: UserId::from_raw(9),
        status: "completed".to_string(),
        created_at: "2024-01-01 09:00:00".to_string(),
        paid_at: Some("2024-01-01 09:05:00".to_string()),
        subscription_end: Some("2024-12-31 23:59:59".to_string()),
        billing_postcode: None,
        items: vec![OrderItem {
            product_id: 28735,
            quantity: 1,
        }],
    };
    let catalog = Arc::new(ProductCatalog::default());
    let source = select_record_source(
        RecordSourceKind::CommerceOrders,
        Arc::new(InMemoryMetadataTable::new()),
        Arc::new(InMemoryOrderBook::with_orders(vec![order])),
        catalog.clone(),
    );
    let handlers = StatisticsHandlers::new(
        &StatisticsConfig::default(),
        catalog,
        source,
        Arc::new(InMemorySnapshotRepository::new()),
    );

    let counts = handlers
        .count_active
        .handle(CountActiveMembersQuery::on(date("2024-06-15")))
        .await
        .unwrap();
    assert_eq!(counts.pension, 1);
}

// =============================================================================
// Series
// =============================================================================

#[tokio::test]
async fn long_series_keeps_both_endpoints() {
    let fixture = fixture(vec![record(1, 9503, "2023-06-01 00:00:00", None)]);

    let series = fixture
        .handlers
        .series
        .handle(BuildActiveSeriesQuery::between(date("2023-01-01"), date("2024-02-04")))
        .await
        .unwrap();

    assert_eq!(series.plan, SamplingPlan::Monthly);
    assert_eq!(series.labels.first().map(String::as_str), Some("2023-01-01"));
    assert_eq!(series.labels.last().map(String::as_str), Some("2024-02-04"));
    assert_eq!(series.series.total.first(), Some(&0));
    assert_eq!(series.series.total.last(), Some(&1));
    assert_eq!(series.labels.len(), series.series.private.len());
}

#[tokio::test]
async fn series_fails_when_store_is_unavailable() {
    let fixture = fixture(vec![record(1, 9503, "2024-01-01 00:00:00", None)]);
    fixture.table.set_unavailable(true);

    let result = fixture
        .handlers
        .series
        .handle(BuildActiveSeriesQuery::between(date("2024-01-01"), date("2024-01-10")))
        .await;

    match result {
        Err(err @ StatisticsError::StorageUnavailable(_)) => {
            assert!(err.is_retryable());
            assert!(!err.user_notice().is_empty());
        }
        other => panic!("expected StorageUnavailable, got {:?}", other),
    }
}

// =============================================================================
// Snapshots and growth
// =============================================================================

#[tokio::test]
async fn recorded_snapshots_feed_monthly_growth() {
    let fixture = fixture(vec![
        record(1, 9503, "2024-01-01 00:00:00", None),
        record(2, 19221, "2024-02-10 00:00:00", None),
    ]);

    for day in ["2024-01-15", "2024-01-31", "2024-02-15", "2024-02-28"] {
        fixture
            .handlers
            .record_snapshot
            .handle(RecordDailySnapshotCommand { date: date(day) })
            .await
            .unwrap();
    }
    assert_eq!(fixture.snapshots.len().await, 4);

    let growth = fixture
        .handlers
        .growth
        .handle(GetMembershipGrowthQuery {
            from: date("2024-01-01"),
            to: date("2024-03-31"),
            period: GrowthPeriod::Monthly,
        })
        .await
        .unwrap();

    assert_eq!(growth.buckets.len(), 2);
    assert_eq!(growth.buckets[0].key, "2024-01");
    assert_eq!(growth.buckets[0].closing.total, 1);
    assert_eq!(growth.buckets[1].closing.total, 2);
    assert_eq!(growth.buckets[1].closing.union, 1);
}
