// Stateless orchestration over the data collaborator: every operation is a
// fetch/compute/respond cycle with no cache or lock in between. The
// availability check and the booking write are separate round trips, so two
// concurrent callers can both see a free room before either booking lands;
// closing that window needs an atomic reserve-if-available on the store side.

use chrono::NaiveDate;
use futures::future::try_join;
use thiserror::Error;

use crate::calendar::{nights_between, period_window, ReportPeriod};
use crate::model::{
    AvailabilitySlot, Booking, BookingStatus, MealPlan, MealPlanPricing, OperatingHours, RatePlan,
    RateSeason, Reservation, RestaurantTable,
};
use crate::overlap::{has_conflict, overlapping_covers};
use crate::rates::{season_for_date, SeasonMatchPolicy};
use crate::stats::{completed_revenue, reduce_bookings, reduce_reservations, BookingStats};
use crate::store::{
    BookingFilter, InventoryStore, NewAvailabilitySlot, NewOperatingHours, NewRatePlan,
    NewRateSeason, ReservationFilter, StoreError,
};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("store call failed: {0}")]
    Store(StoreError),

    // A multi-record write stopped partway. Nothing is rolled back: the
    // store keeps the records already written and the caller must finish or
    // clean up manually.
    #[error("partial write during {operation}: {written} of {expected} records written")]
    PartialWrite {
        operation: &'static str,
        written: usize,
        expected: usize,
        #[source]
        source: StoreError,
    },
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => EngineError::NotFound { entity, id },
            other => EngineError::Store(other),
        }
    }
}

// Field overrides applied when duplicating a rate plan. Unset fields copy
// the source plan.
#[derive(Debug, Clone, Default)]
pub struct RatePlanOverrides {
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_meal_plan: Option<MealPlan>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

// Unset fields copy the source season. Overrides can set a value but not
// clear an optional field back to unset.
#[derive(Debug, Clone, Default)]
pub struct SeasonOverrides {
    pub rate_plan_id: Option<String>,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub base_price: Option<f64>,
    pub currency: Option<String>,
    pub meal_plan_pricing: Option<MealPlanPricing>,
    pub minimum_stay: Option<u32>,
    pub maximum_stay: Option<u32>,
    pub closed_to_arrival: Option<bool>,
    pub closed_to_departure: Option<bool>,
    pub advance_purchase_days: Option<u32>,
    pub cutoff_hours: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct TableAvailability {
    pub available: bool,
    pub suitable_tables: Vec<RestaurantTable>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NightQuote {
    pub date: NaiveDate,
    pub price: f64,
    pub season_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StayQuote {
    pub nights: Vec<NightQuote>,
    pub total: f64,
}

// One entry of a bulk operating-hours upsert: update when `id` is set,
// create otherwise.
#[derive(Debug, Clone)]
pub struct OperatingHoursUpsert {
    pub id: Option<String>,
    pub hours: NewOperatingHours,
}

pub struct HospitalityEngine<S> {
    store: S,
    season_policy: SeasonMatchPolicy,
}

impl<S: InventoryStore> HospitalityEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            season_policy: SeasonMatchPolicy::default(),
        }
    }

    pub fn with_season_policy(store: S, season_policy: SeasonMatchPolicy) -> Self {
        Self {
            store,
            season_policy,
        }
    }

    // Booking records are created directly against the collaborator, not
    // through the engine; expose it so callers share one connection.
    pub fn store(&self) -> &S {
        &self.store
    }

    // A room is free when no pending/confirmed booking intersects the range
    // and no availability slot inside it is explicitly blocked. Absent slot
    // records mean "available".
    pub async fn is_room_available(
        &self,
        venue_id: &str,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<bool, EngineError> {
        let filter = BookingFilter {
            room_id: Some(room_id.to_string()),
            ..Default::default()
        };
        let bookings = self.store.list_bookings(venue_id, filter).await?;
        if has_conflict(&bookings, room_id, check_in, check_out) {
            tracing::debug!(venue_id, room_id, "availability rejected: booking conflict");
            return Ok(false);
        }

        let slots = self
            .store
            .list_availability(venue_id, room_id, check_in, check_out)
            .await?;
        if slots.iter().any(|slot| !slot.is_available) {
            tracing::debug!(venue_id, room_id, "availability rejected: blocked date");
            return Ok(false);
        }
        Ok(true)
    }

    // Restaurant seating is pooled: the party fits when the total capacity
    // of suitable tables covers the guests already seated at the slot plus
    // the new party.
    pub async fn check_table_availability(
        &self,
        venue_id: &str,
        date: NaiveDate,
        time: &str,
        party_size: u32,
    ) -> Result<TableAvailability, EngineError> {
        let filter = ReservationFilter {
            date: Some(date),
            ..Default::default()
        };
        let (tables, reservations) = try_join(
            self.store.list_tables(venue_id),
            self.store.list_reservations(venue_id, filter),
        )
        .await?;

        let suitable_tables: Vec<RestaurantTable> = tables
            .into_iter()
            .filter(|table| table.is_available && table.capacity >= party_size)
            .collect();
        let total_capacity: u32 = suitable_tables.iter().map(|table| table.capacity).sum();
        let reserved = overlapping_covers(&reservations, date, time);

        let available = total_capacity >= reserved + party_size;
        if !available {
            tracing::debug!(
                venue_id,
                total_capacity,
                reserved,
                party_size,
                "table availability rejected"
            );
        }
        Ok(TableAvailability {
            available,
            suitable_tables,
        })
    }

    // Per-night price breakdown for a stay. Nights inside a season price at
    // the season's base (or its meal-plan override); nights outside any
    // season fall back to the room's base price. A stay crossing a season
    // boundary pays the blended total.
    pub async fn quote_stay(
        &self,
        venue_id: &str,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        meal_plan: Option<MealPlan>,
    ) -> Result<StayQuote, EngineError> {
        let stay_nights = nights_between(check_in, check_out);
        if stay_nights.is_empty() {
            return Ok(StayQuote {
                nights: Vec::new(),
                total: 0.0,
            });
        }

        let rooms = self.store.list_rooms(venue_id).await?;
        let room = rooms
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "room",
                id: room_id.to_string(),
            })?;

        let plans = self.store.list_rate_plans(venue_id, Some(room_id)).await?;
        let active_plan = plans.iter().find(|plan| plan.is_active);
        let seasons = match active_plan {
            Some(plan) => {
                self.store
                    .list_rate_seasons(venue_id, Some(&plan.id))
                    .await?
            }
            None => Vec::new(),
        };

        let mut nights = Vec::with_capacity(stay_nights.len());
        let mut total = 0.0;
        for date in stay_nights {
            let season = season_for_date(&seasons, date, self.season_policy);
            let price = match season {
                Some(season) => meal_plan
                    .and_then(|plan| {
                        season
                            .meal_plan_pricing
                            .as_ref()
                            .and_then(|pricing| pricing.price_for(plan))
                    })
                    .unwrap_or(season.base_price),
                None => room.base_price_per_night,
            };
            total += price;
            nights.push(NightQuote {
                date,
                price,
                season_name: season.map(|season| season.season_name.clone()),
            });
        }

        Ok(StayQuote { nights, total })
    }

    pub async fn price_stay(
        &self,
        venue_id: &str,
        room_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        meal_plan: Option<MealPlan>,
    ) -> Result<f64, EngineError> {
        let quote = self
            .quote_stay(venue_id, room_id, check_in, check_out, meal_plan)
            .await?;
        Ok(quote.total)
    }

    // Clone a plan and all of its seasons, re-pointed at the new plan. The
    // plan create and the season creates are separate store calls with no
    // transaction around them; a failure partway surfaces as PartialWrite
    // and leaves the new plan with the seasons written so far.
    pub async fn duplicate_rate_plan(
        &self,
        venue_id: &str,
        plan_id: &str,
        overrides: RatePlanOverrides,
    ) -> Result<(RatePlan, Vec<RateSeason>), EngineError> {
        let plans = self.store.list_rate_plans(venue_id, None).await?;
        let source = plans
            .iter()
            .find(|plan| plan.id == plan_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "rate plan",
                id: plan_id.to_string(),
            })?;

        let seasons = self
            .store
            .list_rate_seasons(venue_id, Some(plan_id))
            .await?;

        let new_plan = self
            .store
            .create_rate_plan(
                venue_id,
                NewRatePlan {
                    room_id: source.room_id.clone(),
                    name: overrides
                        .name
                        .unwrap_or_else(|| format!("{} (copy)", source.name)),
                    description: overrides.description.or_else(|| source.description.clone()),
                    base_meal_plan: overrides.base_meal_plan.unwrap_or(source.base_meal_plan),
                    currency: overrides.currency.unwrap_or_else(|| source.currency.clone()),
                    is_active: overrides.is_active.unwrap_or(source.is_active),
                    display_order: overrides
                        .display_order
                        .unwrap_or(source.display_order + 1),
                },
            )
            .await?;

        let expected = seasons.len();
        let mut created = Vec::with_capacity(expected);
        for season in seasons {
            let result = self
                .store
                .create_rate_season(
                    venue_id,
                    NewRateSeason {
                        rate_plan_id: new_plan.id.clone(),
                        season_name: season.season_name.clone(),
                        start_date: season.start_date,
                        end_date: season.end_date,
                        base_price: season.base_price,
                        currency: season.currency.clone(),
                        meal_plan_pricing: season
                            .meal_plan_pricing
                            .clone()
                            .filter(|pricing| !pricing.is_empty()),
                        minimum_stay: season.minimum_stay,
                        maximum_stay: season.maximum_stay,
                        closed_to_arrival: season.closed_to_arrival,
                        closed_to_departure: season.closed_to_departure,
                        advance_purchase_days: season.advance_purchase_days,
                        cutoff_hours: season.cutoff_hours,
                    },
                )
                .await;
            match result {
                Ok(clone) => created.push(clone),
                Err(source) => {
                    tracing::warn!(
                        venue_id,
                        plan_id,
                        written = created.len(),
                        expected,
                        "rate plan duplication stopped partway"
                    );
                    return Err(EngineError::PartialWrite {
                        operation: "duplicate_rate_plan",
                        written: created.len(),
                        expected,
                        source,
                    });
                }
            }
        }

        Ok((new_plan, created))
    }

    pub async fn duplicate_rate_season(
        &self,
        venue_id: &str,
        season_id: &str,
        overrides: SeasonOverrides,
    ) -> Result<RateSeason, EngineError> {
        let seasons = self.store.list_rate_seasons(venue_id, None).await?;
        let source = seasons
            .iter()
            .find(|season| season.id == season_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "rate season",
                id: season_id.to_string(),
            })?;

        let created = self
            .store
            .create_rate_season(
                venue_id,
                NewRateSeason {
                    rate_plan_id: overrides
                        .rate_plan_id
                        .unwrap_or_else(|| source.rate_plan_id.clone()),
                    season_name: overrides
                        .season_name
                        .unwrap_or_else(|| format!("{} (copy)", source.season_name)),
                    start_date: overrides.start_date.unwrap_or(source.start_date),
                    end_date: overrides.end_date.unwrap_or(source.end_date),
                    base_price: overrides.base_price.unwrap_or(source.base_price),
                    currency: overrides
                        .currency
                        .unwrap_or_else(|| source.currency.clone()),
                    meal_plan_pricing: overrides
                        .meal_plan_pricing
                        .or_else(|| source.meal_plan_pricing.clone())
                        .filter(|pricing| !pricing.is_empty()),
                    minimum_stay: overrides.minimum_stay.or(source.minimum_stay),
                    maximum_stay: overrides.maximum_stay.or(source.maximum_stay),
                    closed_to_arrival: overrides.closed_to_arrival.or(source.closed_to_arrival),
                    closed_to_departure: overrides
                        .closed_to_departure
                        .or(source.closed_to_departure),
                    advance_purchase_days: overrides
                        .advance_purchase_days
                        .or(source.advance_purchase_days),
                    cutoff_hours: overrides.cutoff_hours.or(source.cutoff_hours),
                },
            )
            .await?;
        Ok(created)
    }

    pub async fn delete_rate_plan(&self, venue_id: &str, plan_id: &str) -> Result<(), EngineError> {
        tracing::debug!(venue_id, plan_id, "deleting rate plan");
        self.store.delete_rate_plan(venue_id, plan_id).await?;
        Ok(())
    }

    pub async fn delete_rate_season(
        &self,
        venue_id: &str,
        season_id: &str,
    ) -> Result<(), EngineError> {
        tracing::debug!(venue_id, season_id, "deleting rate season");
        self.store.delete_rate_season(venue_id, season_id).await?;
        Ok(())
    }

    // Reductions over room bookings whose check-in falls inside the
    // half-open window [start, end).
    pub async fn booking_stats(
        &self,
        venue_id: &str,
        room_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
        statuses: Option<&[BookingStatus]>,
    ) -> Result<BookingStats, EngineError> {
        let filter = BookingFilter {
            room_id: room_id.map(str::to_string),
            ..Default::default()
        };
        let bookings = self.store.list_bookings(venue_id, filter).await?;
        Ok(reduce_bookings(&bookings, start, end, statuses))
    }

    pub async fn reservation_stats(
        &self,
        venue_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        statuses: Option<&[BookingStatus]>,
    ) -> Result<BookingStats, EngineError> {
        let reservations = self
            .store
            .list_reservations(venue_id, ReservationFilter::default())
            .await?;
        Ok(reduce_reservations(&reservations, start, end, statuses))
    }

    // Completed-only revenue over the resolved reporting window.
    pub async fn revenue_for_period(
        &self,
        venue_id: &str,
        period: ReportPeriod,
        date: NaiveDate,
    ) -> Result<f64, EngineError> {
        let (start, end) = period_window(period, date);
        let reservations = self
            .store
            .list_reservations(venue_id, ReservationFilter::default())
            .await?;
        Ok(completed_revenue(&reservations, start, end))
    }

    // Upsert the per-date override for a room: update the existing slot
    // when one exists for the date, create it otherwise.
    pub async fn set_room_availability(
        &self,
        venue_id: &str,
        room_id: &str,
        date: NaiveDate,
        is_available: bool,
        special_price: Option<f64>,
    ) -> Result<AvailabilitySlot, EngineError> {
        let existing = self
            .store
            .list_availability(venue_id, room_id, date, date + chrono::Duration::days(1))
            .await?;

        let payload = NewAvailabilitySlot {
            room_id: room_id.to_string(),
            date,
            is_available,
            special_price,
            minimum_stay: existing.first().and_then(|slot| slot.minimum_stay),
        };

        let slot = match existing.first() {
            Some(slot) => {
                self.store
                    .update_availability(venue_id, &slot.id, payload)
                    .await?
            }
            None => self.store.create_availability(venue_id, payload).await?,
        };
        Ok(slot)
    }

    // Bulk upsert of weekly operating hours. Entries are written one by
    // one; a failure stops the loop and surfaces as PartialWrite with the
    // number of entries already written, so the operator can finish the
    // rest manually.
    pub async fn set_operating_hours(
        &self,
        venue_id: &str,
        entries: Vec<OperatingHoursUpsert>,
    ) -> Result<Vec<OperatingHours>, EngineError> {
        let expected = entries.len();
        let mut written = Vec::with_capacity(expected);
        for entry in entries {
            let result = match &entry.id {
                Some(id) => {
                    self.store
                        .update_operating_hours(venue_id, id, entry.hours)
                        .await
                }
                None => self.store.create_operating_hours(venue_id, entry.hours).await,
            };
            match result {
                Ok(hours) => written.push(hours),
                Err(source) => {
                    tracing::warn!(
                        venue_id,
                        written = written.len(),
                        expected,
                        "operating hours upsert stopped partway"
                    );
                    return Err(EngineError::PartialWrite {
                        operation: "set_operating_hours",
                        written: written.len(),
                        expected,
                        source,
                    });
                }
            }
        }
        Ok(written)
    }

    pub async fn update_booking_status(
        &self,
        venue_id: &str,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, EngineError> {
        tracing::debug!(venue_id, booking_id, ?status, "updating booking status");
        let booking = self
            .store
            .update_booking_status(venue_id, booking_id, status)
            .await?;
        Ok(booking)
    }

    // The cancellation reason is only recorded when the reservation is
    // actually being cancelled.
    pub async fn update_reservation_status(
        &self,
        venue_id: &str,
        reservation_id: &str,
        status: BookingStatus,
        reason: Option<String>,
    ) -> Result<Reservation, EngineError> {
        let reason = match status {
            BookingStatus::Cancelled => reason,
            _ => None,
        };
        let reservation = self
            .store
            .update_reservation_status(venue_id, reservation_id, status, reason)
            .await?;
        Ok(reservation)
    }
}
