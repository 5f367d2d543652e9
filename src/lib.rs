// Inventory and pricing engine for mixed hospitality venues: room bookings
// priced through seasonal rate plans, restaurant covers seated against a
// pooled table capacity, and reporting reductions over both.

pub mod calendar;
pub mod engine;
pub mod memory;
pub mod model;
pub mod overlap;
pub mod rates;
pub mod stats;
pub mod store;

// Re-export key types for convenience
pub use engine::{
    EngineError, HospitalityEngine, NightQuote, OperatingHoursUpsert, RatePlanOverrides,
    SeasonOverrides, StayQuote, TableAvailability,
};
pub use calendar::{nights_between, period_window, ReportPeriod};
pub use memory::InMemoryStore;
pub use model::{
    AvailabilitySlot, Booking, BookingStatus, MealPlan, MealPlanPricing, OperatingHours, RatePlan,
    RateSeason, Reservation, RestaurantTable, Room,
};
pub use rates::{resolve_nightly_price, season_for_date, SeasonMatchPolicy};
pub use stats::BookingStats;
pub use store::{
    BookingFilter, InventoryStore, NewAvailabilitySlot, NewBooking, NewOperatingHours, NewRatePlan,
    NewRateSeason, NewReservation, ReservationFilter, StoreError,
};
