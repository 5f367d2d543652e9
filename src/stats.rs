// Pure reductions over booking and reservation collections. Nothing here
// mutates a record or talks to the store.

use chrono::NaiveDate;

use crate::model::{Booking, BookingStatus, Reservation};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStats {
    pub total_count: usize,
    pub confirmed_count: usize,
    pub total_guests: u32,
    pub total_revenue: f64,
    pub average_party_size: f64,
}

fn in_window(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    date >= start && date < end
}

fn status_allowed(status: BookingStatus, statuses: Option<&[BookingStatus]>) -> bool {
    statuses.map_or(true, |allowed| allowed.contains(&status))
}

fn finish(total_count: usize, confirmed_count: usize, total_guests: u32, total_revenue: f64) -> BookingStats {
    let average_party_size = if total_count > 0 {
        total_guests as f64 / total_count as f64
    } else {
        0.0
    };
    BookingStats {
        total_count,
        confirmed_count,
        total_guests,
        total_revenue,
        average_party_size,
    }
}

// Reduce room bookings whose check-in falls inside the half-open window
// [start, end), optionally restricted to a status set.
pub fn reduce_bookings(
    bookings: &[Booking],
    start: NaiveDate,
    end: NaiveDate,
    statuses: Option<&[BookingStatus]>,
) -> BookingStats {
    let mut total_count = 0;
    let mut confirmed_count = 0;
    let mut total_guests = 0;
    let mut total_revenue = 0.0;

    for booking in bookings {
        if !in_window(booking.check_in_date, start, end)
            || !status_allowed(booking.status, statuses)
        {
            continue;
        }
        total_count += 1;
        if booking.status == BookingStatus::Confirmed {
            confirmed_count += 1;
        }
        total_guests += booking.number_of_guests;
        total_revenue += booking.total_amount;
    }

    finish(total_count, confirmed_count, total_guests, total_revenue)
}

// Same reductions over restaurant covers, keyed on the reservation date.
pub fn reduce_reservations(
    reservations: &[Reservation],
    start: NaiveDate,
    end: NaiveDate,
    statuses: Option<&[BookingStatus]>,
) -> BookingStats {
    let mut total_count = 0;
    let mut confirmed_count = 0;
    let mut total_guests = 0;
    let mut total_revenue = 0.0;

    for reservation in reservations {
        if !in_window(reservation.reservation_date, start, end)
            || !status_allowed(reservation.status, statuses)
        {
            continue;
        }
        total_count += 1;
        if reservation.status == BookingStatus::Confirmed {
            confirmed_count += 1;
        }
        total_guests += reservation.party_size;
        total_revenue += reservation.total_amount.unwrap_or(0.0);
    }

    finish(total_count, confirmed_count, total_guests, total_revenue)
}

// Completed-only revenue for the period report.
pub fn completed_revenue(reservations: &[Reservation], start: NaiveDate, end: NaiveDate) -> f64 {
    reservations
        .iter()
        .filter(|reservation| {
            reservation.status == BookingStatus::Completed
                && in_window(reservation.reservation_date, start, end)
        })
        .map(|reservation| reservation.total_amount.unwrap_or(0.0))
        .sum()
}
