// Domain records for the hospitality inventory, matching the JSON shape
// of the external data collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Catering level bundled with a rate plan. "bb" is the wire name the
// collaborator uses for bed & breakfast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPlan {
    RoomOnly,
    #[serde(rename = "bb")]
    BedAndBreakfast,
    HalfBoard,
    FullBoard,
    AllInclusive,
}

// Sparse per-meal-plan nightly price overrides attached to a rate season.
// A missing entry means "use the season's base price".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MealPlanPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_only: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_board: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_board: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_inclusive: Option<f64>,
}

impl MealPlanPricing {
    pub fn price_for(&self, plan: MealPlan) -> Option<f64> {
        match plan {
            MealPlan::RoomOnly => self.room_only,
            MealPlan::BedAndBreakfast => self.bb,
            MealPlan::HalfBoard => self.half_board,
            MealPlan::FullBoard => self.full_board,
            MealPlan::AllInclusive => self.all_inclusive,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.room_only.is_none()
            && self.bb.is_none()
            && self.half_board.is_none()
            && self.full_board.is_none()
            && self.all_inclusive.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    // Only pending/confirmed bookings count toward occupancy and conflict
    // checks. Completed stays are history, cancelled/no-show never held
    // the dates.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub venue_id: String,
    pub room_name: String,
    pub room_type: String,
    pub capacity: u32,
    pub base_price_per_night: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub inventory_total: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestaurantTable {
    pub id: String,
    pub venue_id: String,
    pub table_number: String,
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RatePlan {
    pub id: String,
    pub venue_id: String,
    pub room_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base_meal_plan: MealPlan,
    pub currency: String,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateSeason {
    pub id: String,
    pub rate_plan_id: String,
    pub season_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_price: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_plan_pricing: Option<MealPlanPricing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_stay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_to_arrival: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_to_departure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advance_purchase_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_hours: Option<u32>,
}

impl RateSeason {
    // Pricing containment is inclusive of both bounds; a stay that should
    // stop pricing at July 10 stores end_date = July 9.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date >= date
    }
}

// Room booking: a date range of nights, check-out day exclusive.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Booking {
    pub id: String,
    pub venue_id: String,
    pub room_id: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub number_of_guests: u32,
    pub total_nights: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

// Restaurant cover: a single (date, time-slot) rather than a range.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Reservation {
    pub id: String,
    pub venue_id: String,
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub party_size: u32,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

// Per-date override of a room's default availability and price. Absence of
// a slot for a date means "available at the default price".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailabilitySlot {
    pub id: String,
    pub room_id: String,
    pub date: NaiveDate,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OperatingHours {
    pub id: String,
    pub venue_id: String,
    pub day_of_week: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    pub is_closed: bool,
}
