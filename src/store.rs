// The external data collaborator, seen from the engine's side. The engine
// never owns storage: every operation re-fetches through this trait and
// writes back individual records. Real deployments implement it over the
// remote API; `memory::InMemoryStore` is the reference implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{
    AvailabilitySlot, Booking, BookingStatus, MealPlan, MealPlanPricing, OperatingHours,
    RatePlan, RateSeason, Reservation, RestaurantTable, Room,
};

#[derive(Error, Debug)]
pub enum StoreError {
    // Network/server failure on the collaborator side. The engine performs
    // no retry of its own; callers decide.
    #[error("transient store failure: {0}")]
    Transient(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}

// Filters for list calls; `None` on every field means "all records for the
// venue". Ordering of the returned collection is the storage order.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub room_id: Option<String>,
    pub statuses: Option<Vec<BookingStatus>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub date: Option<NaiveDate>,
    pub statuses: Option<Vec<BookingStatus>>,
}

// Create payloads: the record without the fields the store generates.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: u32,
    pub total_nights: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub party_size: u32,
    pub status: BookingStatus,
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewRatePlan {
    pub room_id: String,
    pub name: String,
    pub description: Option<String>,
    pub base_meal_plan: MealPlan,
    pub currency: String,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone)]
pub struct NewRateSeason {
    pub rate_plan_id: String,
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_price: f64,
    pub currency: String,
    pub meal_plan_pricing: Option<MealPlanPricing>,
    pub minimum_stay: Option<u32>,
    pub maximum_stay: Option<u32>,
    pub closed_to_arrival: Option<bool>,
    pub closed_to_departure: Option<bool>,
    pub advance_purchase_days: Option<u32>,
    pub cutoff_hours: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct NewAvailabilitySlot {
    pub room_id: String,
    pub date: NaiveDate,
    pub is_available: bool,
    pub special_price: Option<f64>,
    pub minimum_stay: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct NewOperatingHours {
    pub day_of_week: u8,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub is_closed: bool,
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_rooms(&self, venue_id: &str) -> Result<Vec<Room>, StoreError>;

    async fn list_tables(&self, venue_id: &str) -> Result<Vec<RestaurantTable>, StoreError>;

    async fn list_bookings(
        &self,
        venue_id: &str,
        filter: BookingFilter,
    ) -> Result<Vec<Booking>, StoreError>;

    async fn create_booking(
        &self,
        venue_id: &str,
        booking: NewBooking,
    ) -> Result<Booking, StoreError>;

    async fn update_booking_status(
        &self,
        venue_id: &str,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;

    async fn list_reservations(
        &self,
        venue_id: &str,
        filter: ReservationFilter,
    ) -> Result<Vec<Reservation>, StoreError>;

    async fn create_reservation(
        &self,
        venue_id: &str,
        reservation: NewReservation,
    ) -> Result<Reservation, StoreError>;

    async fn update_reservation_status(
        &self,
        venue_id: &str,
        reservation_id: &str,
        status: BookingStatus,
        cancellation_reason: Option<String>,
    ) -> Result<Reservation, StoreError>;

    async fn list_rate_plans(
        &self,
        venue_id: &str,
        room_id: Option<&str>,
    ) -> Result<Vec<RatePlan>, StoreError>;

    async fn create_rate_plan(
        &self,
        venue_id: &str,
        plan: NewRatePlan,
    ) -> Result<RatePlan, StoreError>;

    async fn delete_rate_plan(&self, venue_id: &str, plan_id: &str) -> Result<(), StoreError>;

    async fn list_rate_seasons(
        &self,
        venue_id: &str,
        rate_plan_id: Option<&str>,
    ) -> Result<Vec<RateSeason>, StoreError>;

    async fn create_rate_season(
        &self,
        venue_id: &str,
        season: NewRateSeason,
    ) -> Result<RateSeason, StoreError>;

    async fn delete_rate_season(&self, venue_id: &str, season_id: &str) -> Result<(), StoreError>;

    // Slots intersecting the half-open range [from, to). A slot on the
    // check-out date belongs to the next stay and is not returned.
    async fn list_availability(
        &self,
        venue_id: &str,
        room_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, StoreError>;

    async fn create_availability(
        &self,
        venue_id: &str,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, StoreError>;

    async fn update_availability(
        &self,
        venue_id: &str,
        slot_id: &str,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, StoreError>;

    async fn list_operating_hours(&self, venue_id: &str)
        -> Result<Vec<OperatingHours>, StoreError>;

    async fn create_operating_hours(
        &self,
        venue_id: &str,
        hours: NewOperatingHours,
    ) -> Result<OperatingHours, StoreError>;

    async fn update_operating_hours(
        &self,
        venue_id: &str,
        hours_id: &str,
        hours: NewOperatingHours,
    ) -> Result<OperatingHours, StoreError>;
}
