// tests/hotel_db.rs
//
// Runs against a real Postgres: DATABASE_URL=... cargo test -- --ignored

use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal_macros::dec;
use sqlx::{postgres::PgPoolOptions, PgPool};

use hotel_chronolog::{
    common::error::AppError,
    config::AppState,
    db::TelemetryRepository,
    models::{
        catalog::Service,
        guest::{Guest, GuestType},
        room::{Room, RoomType},
        telemetry::{NewTimelineEvent, TimeseriesQuery},
    },
    services::booking_service::BookingRequest,
};

async fn setup() -> (PgPool, AppState) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for ignored tests");
    let pool = PgPoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    let state = AppState::with_pool(pool.clone());
    (pool, state)
}

fn unique(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}{}", nanos % 1_000_000_000)
}

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
}

async fn room_with_type(state: &AppState, pool: &PgPool) -> Room {
    let room_type = state
        .room_service
        .create_room_type(
            pool,
            RoomType {
                id: 0,
                name: unique("Deluxe "),
                base_price: dec!(100),
                description: String::new(),
            },
        )
        .await
        .unwrap();

    state
        .room_service
        .create_room(
            pool,
            Room {
                id: 0,
                room_number: unique("R"),
                room_type_id: room_type.id,
                last_maintenance: None,
            },
        )
        .await
        .unwrap()
}

async fn guest(state: &AppState, pool: &PgPool) -> Guest {
    state
        .guest_service
        .create_guest(
            pool,
            Guest {
                id: 0,
                first_name: "Ana".into(),
                last_name: "Souza".into(),
                email: format!("{}@example.com", unique("ana")),
                phone: String::new(),
                date_of_birth: None,
                is_active: true,
                guest_type: GuestType::Regular,
                loyalty_points: 0,
            },
        )
        .await
        .unwrap()
}

async fn service(state: &AppState, pool: &PgPool, price: rust_decimal::Decimal) -> Service {
    state
        .catalog_service
        .create_service(
            pool,
            Service {
                id: 0,
                name: unique("Svc "),
                price,
                is_active: true,
            },
        )
        .await
        .unwrap()
}

async fn count(pool: &PgPool, sql: &str, id: i32) -> i64 {
    sqlx::query_scalar(sql).bind(id).fetch_one(pool).await.unwrap()
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn booking_total_includes_room_nights_and_services() {
    let (pool, state) = setup().await;
    let room = room_with_type(&state, &pool).await;
    let guest = guest(&state, &pool).await;
    let breakfast = service(&state, &pool, dec!(50)).await;
    let parking = service(&state, &pool, dec!(25)).await;

    let booking = state
        .booking_service
        .create_booking(
            &pool,
            BookingRequest {
                guest_id: guest.id,
                room_id: room.id,
                check_in: at(1, 14),
                check_out: at(3, 14),
                service_ids: vec![breakfast.id, parking.id, i32::MAX],
            },
        )
        .await
        .unwrap();

    assert_eq!(booking.total_price, dec!(275));
    let stored = state.booking_service.get_booking(&pool, booking.id).await.unwrap();
    assert_eq!(stored.total_price, dec!(275));

    let lines = state.booking_service.list_booking_services(&pool, booking.id).await.unwrap();
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn deleting_a_guest_removes_their_bookings() {
    let (pool, state) = setup().await;
    let room = room_with_type(&state, &pool).await;
    let guest = guest(&state, &pool).await;
    let extra = service(&state, &pool, dec!(10)).await;

    let booking = state
        .booking_service
        .create_booking(
            &pool,
            BookingRequest {
                guest_id: guest.id,
                room_id: room.id,
                check_in: at(5, 14),
                check_out: at(6, 11),
                service_ids: vec![extra.id],
            },
        )
        .await
        .unwrap();

    state.guest_service.delete_guest(&pool, guest.id).await.unwrap();

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM guests WHERE id = $1", guest.id).await, 0);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM bookings WHERE guest_id = $1", guest.id).await, 0);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM booking_services WHERE booking_id = $1", booking.id).await,
        0
    );

    let again = state.guest_service.delete_guest(&pool, guest.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn room_with_bookings_cannot_be_deleted() {
    let (pool, state) = setup().await;
    let room = room_with_type(&state, &pool).await;
    let guest = guest(&state, &pool).await;

    let booking = state
        .booking_service
        .create_booking(
            &pool,
            BookingRequest {
                guest_id: guest.id,
                room_id: room.id,
                check_in: at(10, 14),
                check_out: at(12, 11),
                service_ids: vec![],
            },
        )
        .await
        .unwrap();

    let result = state.room_service.delete_room(&pool, room.id).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM rooms WHERE id = $1", room.id).await, 1);
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM bookings WHERE id = $1", booking.id).await, 1);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_room_number_is_a_conflict() {
    let (pool, state) = setup().await;
    let room = room_with_type(&state, &pool).await;

    let duplicate = Room {
        id: 0,
        room_number: room.room_number.clone(),
        room_type_id: room.room_type_id,
        last_maintenance: None,
    };
    let result = state.room_service.create_room(&pool, duplicate).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE room_number = $1")
        .bind(&room.room_number)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn failed_booking_leaves_no_rows() {
    let (pool, state) = setup().await;
    let room = room_with_type(&state, &pool).await;
    let extra = service(&state, &pool, dec!(30)).await;

    let result = state
        .booking_service
        .create_booking(
            &pool,
            BookingRequest {
                guest_id: i32::MAX,
                room_id: room.id,
                check_in: at(20, 14),
                check_out: at(22, 11),
                service_ids: vec![extra.id],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InternalServerError(_))));
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM bookings WHERE room_id = $1", room.id).await, 0);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM booking_services WHERE service_id = $1", extra.id).await,
        0
    );
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn timeseries_returns_newest_points_oldest_first() {
    let (pool, state) = setup().await;
    let repo = TelemetryRepository::new();
    let metric = unique("metric_");

    let events: Vec<NewTimelineEvent> = (1..=3)
        .map(|n| NewTimelineEvent {
            time: Some(at(1, n)),
            event: metric.clone(),
            message_id: None,
            message_values: None,
            value: Some(f64::from(n) * 10.0),
        })
        .collect();

    let mut tx = pool.begin().await.unwrap();
    assert_eq!(repo.insert_events(&mut *tx, &events).await.unwrap(), 3);
    tx.commit().await.unwrap();

    let points = state
        .telemetry_service
        .timeseries(
            &pool,
            &TimeseriesQuery {
                metric: Some(metric),
                limit: Some(2),
            },
        )
        .await
        .unwrap();

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![20.0, 30.0]);
}

#[tokio::test]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn message_templates_are_stored_once() {
    let (pool, _state) = setup().await;
    let repo = TelemetryRepository::new();
    let template = format!("ERROR {} failed after {{num}} retries", unique("job"));

    let first = repo.get_or_insert_message(&pool, &template).await.unwrap();
    let second = repo.get_or_insert_message(&pool, &template).await.unwrap();
    assert_eq!(first, second);

    let messages = repo.messages(&pool).await.unwrap();
    assert_eq!(messages.get(&first.to_string()), Some(&template));
}
