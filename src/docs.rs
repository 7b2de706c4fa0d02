// src/docs.rs

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Guests ---
        handlers::guests::list_guests,
        handlers::guests::get_guest,
        handlers::guests::create_guest,
        handlers::guests::update_guest,
        handlers::guests::delete_guest,

        // --- Rooms ---
        handlers::rooms::list_rooms,
        handlers::rooms::get_room,
        handlers::rooms::create_room,
        handlers::rooms::delete_room,
        handlers::rooms::list_room_types,
        handlers::rooms::create_room_type,

        // --- Services ---
        handlers::catalog::list_services,
        handlers::catalog::create_service,

        // --- Bookings ---
        handlers::bookings::list_bookings,
        handlers::bookings::get_booking,
        handlers::bookings::create_booking,
        handlers::bookings::delete_booking,

        // --- Import ---
        handlers::imports::import_guests,
        handlers::imports::import_services,

        // --- Reports ---
        handlers::reports::guest_bookings,
        handlers::reports::room_availability,
        handlers::reports::service_stats,
        handlers::reports::revenue_by_room_type,

        // --- ChronoLog ---
        handlers::telemetry::summary,
        handlers::telemetry::timeline,
        handlers::telemetry::timeseries,
        handlers::telemetry::messages,
        handlers::telemetry::health,
    ),
    components(
        schemas(
            // --- Hotel ---
            models::guest::GuestType,
            models::guest::Guest,
            models::guest::GuestImportRecord,
            models::room::RoomType,
            models::room::Room,
            models::catalog::Service,
            models::catalog::ServiceImportRecord,
            models::booking::BookingStatus,
            models::booking::Booking,
            models::booking::BookingService,
            models::import::ImportSummary,

            // --- Reports ---
            models::report::GuestBookingReport,
            models::report::RoomAvailabilityReport,
            models::report::ServiceUsageStatsReport,
            models::report::RevenueByRoomTypeReport,

            // --- ChronoLog ---
            models::telemetry::Summary,
            models::telemetry::LatencyMetrics,
            models::telemetry::TimelineEvent,
            models::telemetry::TimeseriesPoint,

            // --- Payloads ---
            handlers::guests::GuestPayload,
            handlers::rooms::CreateRoomPayload,
            handlers::rooms::CreateRoomTypePayload,
            handlers::catalog::CreateServicePayload,
            handlers::bookings::CreateBookingPayload,
            handlers::bookings::BookingDetails,
        )
    ),
    tags(
        (name = "Guests", description = "Guest records"),
        (name = "Rooms", description = "Rooms and room types"),
        (name = "Services", description = "Extra services that can be added to a booking"),
        (name = "Bookings", description = "Reservations and their pricing"),
        (name = "Import", description = "Bulk JSON imports"),
        (name = "Reports", description = "Read-only reporting views"),
        (name = "ChronoLog", description = "Log telemetry dashboard")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/guests",
            "/api/guests/{id}",
            "/api/rooms/{id}",
            "/api/room-types",
            "/api/bookings",
            "/api/import/services",
            "/api/reports/revenue-by-room-type",
            "/api/timeseries",
            "/api/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing from OpenAPI");
        }
    }
}
