// Conflict detection between a candidate booking and the existing ones.

use chrono::NaiveDate;

use crate::model::{Booking, Reservation};

// Half-open interval intersection: [a_start, a_end) and [b_start, b_end)
// intersect iff a_start < b_end and b_start < a_end. A booking checking out
// the day another checks in does not conflict.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

// True if any pending/confirmed booking for the room intersects the
// candidate range. Cancelled and no-show bookings never held the dates;
// completed stays are in the past and cannot conflict with a future range.
pub fn has_conflict(
    bookings: &[Booking],
    room_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> bool {
    bookings.iter().any(|booking| {
        booking.room_id == room_id
            && booking.status.is_active()
            && ranges_overlap(
                check_in,
                check_out,
                booking.check_in_date,
                booking.check_out_date,
            )
    })
}

// Restaurant covers compete on (date, time-slot) equality rather than a
// continuous range. Returns the number of guests holding seats at the slot:
// pending/confirmed parties only. Completed visits count toward revenue but
// release their seats, same as completed room stays release their dates.
pub fn overlapping_covers(reservations: &[Reservation], date: NaiveDate, time: &str) -> u32 {
    reservations
        .iter()
        .filter(|reservation| {
            reservation.status.is_active()
                && reservation.reservation_date == date
                && reservation.reservation_time == time
        })
        .map(|reservation| reservation.party_size)
        .sum()
}
