// In-memory reference implementation of the data collaborator. Collections
// are Vec-backed so list calls return records in insertion order, which the
// season resolution policy depends on. Used by tests and benches, and as a
// template for real remote-API adapters.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::model::{
    AvailabilitySlot, Booking, BookingStatus, OperatingHours, RatePlan, RateSeason, Reservation,
    RestaurantTable, Room,
};
use crate::store::{
    BookingFilter, InventoryStore, NewAvailabilitySlot, NewBooking, NewOperatingHours,
    NewRatePlan, NewRateSeason, NewReservation, ReservationFilter, StoreError,
};

#[derive(Default)]
struct Inner {
    rooms: Vec<Room>,
    tables: Vec<RestaurantTable>,
    bookings: Vec<Booking>,
    reservations: Vec<Reservation>,
    rate_plans: Vec<RatePlan>,
    rate_seasons: Vec<RateSeason>,
    availability: Vec<AvailabilitySlot>,
    operating_hours: Vec<OperatingHours>,
}

pub struct InMemoryStore {
    inner: RwLock<Inner>,
    // Remaining create calls before injected failure; usize::MAX disables
    // injection.
    create_budget: AtomicUsize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn gen_id(prefix: &str) -> String {
    format!("{}-{}", prefix, rand::random::<u32>())
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            create_budget: AtomicUsize::new(usize::MAX),
        }
    }

    // Allow the next `remaining` create calls to succeed, then fail every
    // subsequent one with a transient error. Lets tests exercise the
    // partial-write paths of multi-record operations.
    pub fn fail_creates_after(&self, remaining: usize) {
        self.create_budget.store(remaining, Ordering::SeqCst);
    }

    fn take_create_budget(&self) -> Result<(), StoreError> {
        let budget = self.create_budget.load(Ordering::SeqCst);
        if budget == usize::MAX {
            return Ok(());
        }
        if budget == 0 {
            return Err(StoreError::Transient("injected create failure".to_string()));
        }
        self.create_budget.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }

    pub fn seed_room(&self, room: Room) {
        self.inner.write().rooms.push(room);
    }

    pub fn seed_table(&self, table: RestaurantTable) {
        self.inner.write().tables.push(table);
    }

    pub fn seed_booking(&self, booking: Booking) {
        self.inner.write().bookings.push(booking);
    }

    pub fn seed_reservation(&self, reservation: Reservation) {
        self.inner.write().reservations.push(reservation);
    }

    pub fn seed_rate_plan(&self, plan: RatePlan) {
        self.inner.write().rate_plans.push(plan);
    }

    pub fn seed_rate_season(&self, season: RateSeason) {
        self.inner.write().rate_seasons.push(season);
    }

    pub fn seed_availability(&self, slot: AvailabilitySlot) {
        self.inner.write().availability.push(slot);
    }

    pub fn seed_operating_hours(&self, hours: OperatingHours) {
        self.inner.write().operating_hours.push(hours);
    }
}

#[async_trait]
impl InventoryStore for InMemoryStore {
    async fn list_rooms(&self, venue_id: &str) -> Result<Vec<Room>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .rooms
            .iter()
            .filter(|room| room.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn list_tables(&self, venue_id: &str) -> Result<Vec<RestaurantTable>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .tables
            .iter()
            .filter(|table| table.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn list_bookings(
        &self,
        venue_id: &str,
        filter: BookingFilter,
    ) -> Result<Vec<Booking>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .bookings
            .iter()
            .filter(|booking| booking.venue_id == venue_id)
            .filter(|booking| {
                filter
                    .room_id
                    .as_deref()
                    .map_or(true, |room_id| booking.room_id == room_id)
            })
            .filter(|booking| {
                filter
                    .statuses
                    .as_deref()
                    .map_or(true, |statuses| statuses.contains(&booking.status))
            })
            .cloned()
            .collect())
    }

    async fn create_booking(
        &self,
        venue_id: &str,
        booking: NewBooking,
    ) -> Result<Booking, StoreError> {
        self.take_create_budget()?;
        let record = Booking {
            id: gen_id("booking"),
            venue_id: venue_id.to_string(),
            room_id: booking.room_id,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            number_of_guests: booking.number_of_guests,
            total_nights: booking.total_nights,
            total_amount: booking.total_amount,
            status: booking.status,
            special_requests: booking.special_requests,
        };
        self.inner.write().bookings.push(record.clone());
        Ok(record)
    }

    async fn update_booking_status(
        &self,
        venue_id: &str,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let mut inner = self.inner.write();
        let booking = inner
            .bookings
            .iter_mut()
            .find(|booking| booking.venue_id == venue_id && booking.id == booking_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "booking",
                id: booking_id.to_string(),
            })?;
        booking.status = status;
        Ok(booking.clone())
    }

    async fn list_reservations(
        &self,
        venue_id: &str,
        filter: ReservationFilter,
    ) -> Result<Vec<Reservation>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .reservations
            .iter()
            .filter(|reservation| reservation.venue_id == venue_id)
            .filter(|reservation| {
                filter
                    .date
                    .map_or(true, |date| reservation.reservation_date == date)
            })
            .filter(|reservation| {
                filter
                    .statuses
                    .as_deref()
                    .map_or(true, |statuses| statuses.contains(&reservation.status))
            })
            .cloned()
            .collect())
    }

    async fn create_reservation(
        &self,
        venue_id: &str,
        reservation: NewReservation,
    ) -> Result<Reservation, StoreError> {
        self.take_create_budget()?;
        let record = Reservation {
            id: gen_id("reservation"),
            venue_id: venue_id.to_string(),
            customer_name: reservation.customer_name,
            customer_email: reservation.customer_email,
            customer_phone: reservation.customer_phone,
            reservation_date: reservation.reservation_date,
            reservation_time: reservation.reservation_time,
            party_size: reservation.party_size,
            status: reservation.status,
            total_amount: reservation.total_amount,
            cancellation_reason: None,
        };
        self.inner.write().reservations.push(record.clone());
        Ok(record)
    }

    async fn update_reservation_status(
        &self,
        venue_id: &str,
        reservation_id: &str,
        status: BookingStatus,
        cancellation_reason: Option<String>,
    ) -> Result<Reservation, StoreError> {
        let mut inner = self.inner.write();
        let reservation = inner
            .reservations
            .iter_mut()
            .find(|reservation| {
                reservation.venue_id == venue_id && reservation.id == reservation_id
            })
            .ok_or_else(|| StoreError::NotFound {
                entity: "reservation",
                id: reservation_id.to_string(),
            })?;
        reservation.status = status;
        if let Some(reason) = cancellation_reason {
            reservation.cancellation_reason = Some(reason);
        }
        Ok(reservation.clone())
    }

    async fn list_rate_plans(
        &self,
        venue_id: &str,
        room_id: Option<&str>,
    ) -> Result<Vec<RatePlan>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .rate_plans
            .iter()
            .filter(|plan| plan.venue_id == venue_id)
            .filter(|plan| room_id.map_or(true, |room_id| plan.room_id == room_id))
            .cloned()
            .collect())
    }

    async fn create_rate_plan(
        &self,
        venue_id: &str,
        plan: NewRatePlan,
    ) -> Result<RatePlan, StoreError> {
        self.take_create_budget()?;
        let record = RatePlan {
            id: gen_id("plan"),
            venue_id: venue_id.to_string(),
            room_id: plan.room_id,
            name: plan.name,
            description: plan.description,
            base_meal_plan: plan.base_meal_plan,
            currency: plan.currency,
            is_active: plan.is_active,
            display_order: plan.display_order,
        };
        self.inner.write().rate_plans.push(record.clone());
        Ok(record)
    }

    async fn delete_rate_plan(&self, venue_id: &str, plan_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let before = inner.rate_plans.len();
        inner
            .rate_plans
            .retain(|plan| !(plan.venue_id == venue_id && plan.id == plan_id));
        if inner.rate_plans.len() == before {
            return Err(StoreError::NotFound {
                entity: "rate plan",
                id: plan_id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_rate_seasons(
        &self,
        venue_id: &str,
        rate_plan_id: Option<&str>,
    ) -> Result<Vec<RateSeason>, StoreError> {
        let inner = self.inner.read();
        let venue_plan_ids: Vec<&str> = inner
            .rate_plans
            .iter()
            .filter(|plan| plan.venue_id == venue_id)
            .map(|plan| plan.id.as_str())
            .collect();
        Ok(inner
            .rate_seasons
            .iter()
            .filter(|season| venue_plan_ids.contains(&season.rate_plan_id.as_str()))
            .filter(|season| {
                rate_plan_id.map_or(true, |plan_id| season.rate_plan_id == plan_id)
            })
            .cloned()
            .collect())
    }

    async fn create_rate_season(
        &self,
        _venue_id: &str,
        season: NewRateSeason,
    ) -> Result<RateSeason, StoreError> {
        self.take_create_budget()?;
        let record = RateSeason {
            id: gen_id("season"),
            rate_plan_id: season.rate_plan_id,
            season_name: season.season_name,
            start_date: season.start_date,
            end_date: season.end_date,
            base_price: season.base_price,
            currency: season.currency,
            meal_plan_pricing: season.meal_plan_pricing,
            minimum_stay: season.minimum_stay,
            maximum_stay: season.maximum_stay,
            closed_to_arrival: season.closed_to_arrival,
            closed_to_departure: season.closed_to_departure,
            advance_purchase_days: season.advance_purchase_days,
            cutoff_hours: season.cutoff_hours,
        };
        self.inner.write().rate_seasons.push(record.clone());
        Ok(record)
    }

    async fn delete_rate_season(&self, _venue_id: &str, season_id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let before = inner.rate_seasons.len();
        inner.rate_seasons.retain(|season| season.id != season_id);
        if inner.rate_seasons.len() == before {
            return Err(StoreError::NotFound {
                entity: "rate season",
                id: season_id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_availability(
        &self,
        _venue_id: &str,
        room_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .availability
            .iter()
            .filter(|slot| slot.room_id == room_id && slot.date >= from && slot.date < to)
            .cloned()
            .collect())
    }

    async fn create_availability(
        &self,
        _venue_id: &str,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, StoreError> {
        self.take_create_budget()?;
        let record = AvailabilitySlot {
            id: gen_id("slot"),
            room_id: slot.room_id,
            date: slot.date,
            is_available: slot.is_available,
            special_price: slot.special_price,
            minimum_stay: slot.minimum_stay,
        };
        self.inner.write().availability.push(record.clone());
        Ok(record)
    }

    async fn update_availability(
        &self,
        _venue_id: &str,
        slot_id: &str,
        slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, StoreError> {
        let mut inner = self.inner.write();
        let record = inner
            .availability
            .iter_mut()
            .find(|existing| existing.id == slot_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "availability slot",
                id: slot_id.to_string(),
            })?;
        record.room_id = slot.room_id;
        record.date = slot.date;
        record.is_available = slot.is_available;
        record.special_price = slot.special_price;
        record.minimum_stay = slot.minimum_stay;
        Ok(record.clone())
    }

    async fn list_operating_hours(
        &self,
        venue_id: &str,
    ) -> Result<Vec<OperatingHours>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .operating_hours
            .iter()
            .filter(|hours| hours.venue_id == venue_id)
            .cloned()
            .collect())
    }

    async fn create_operating_hours(
        &self,
        venue_id: &str,
        hours: NewOperatingHours,
    ) -> Result<OperatingHours, StoreError> {
        self.take_create_budget()?;
        let record = OperatingHours {
            id: gen_id("hours"),
            venue_id: venue_id.to_string(),
            day_of_week: hours.day_of_week,
            open_time: hours.open_time,
            close_time: hours.close_time,
            is_closed: hours.is_closed,
        };
        self.inner.write().operating_hours.push(record.clone());
        Ok(record)
    }

    async fn update_operating_hours(
        &self,
        venue_id: &str,
        hours_id: &str,
        hours: NewOperatingHours,
    ) -> Result<OperatingHours, StoreError> {
        let mut inner = self.inner.write();
        let record = inner
            .operating_hours
            .iter_mut()
            .find(|existing| existing.venue_id == venue_id && existing.id == hours_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "operating hours",
                id: hours_id.to_string(),
            })?;
        record.day_of_week = hours.day_of_week;
        record.open_time = hours.open_time;
        record.close_time = hours.close_time;
        record.is_closed = hours.is_closed;
        Ok(record.clone())
    }
}
