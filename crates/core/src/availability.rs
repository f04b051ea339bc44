//! # Availability Resolver
//!
//! Computes which of today's bookable slots are still free.
//!
//! Slots sit on a fixed hourly grid from 09:00 to 17:00 inclusive on the calendar
//! date of the reference instant. A slot is taken only when an appointment exists
//! at exactly the same instant; appointments on any other date never match, since
//! candidates are always generated for the reference date.

use chrono::{DateTime, SecondsFormat, TimeZone, Timelike};
use std::fmt::Display;

use crate::models::appointment::Appointment;

/// Hour of the first bookable slot.
pub const FIRST_SLOT_HOUR: u32 = 9;

/// Hour of the last bookable slot.
pub const LAST_SLOT_HOUR: u32 = 17;

/// Builds the candidate slots for the reference instant's calendar date.
///
/// Minutes and seconds are zeroed; the sub-second part of `reference` carries
/// over unchanged. A candidate that does not exist in the reference time zone
/// (a DST gap) is skipped rather than reported as an error.
pub fn generate_slots<Tz: TimeZone>(reference: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| {
            reference
                .with_hour(hour)?
                .with_minute(0)?
                .with_second(0)
        })
        .collect()
}

/// Returns the candidate slots not booked by any appointment, in chronological order.
///
/// # Example
///
/// ```
/// use agenda_core::availability::free_slots;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 15, 0).unwrap();
/// assert_eq!(free_slots(&now, &[]).len(), 9);
/// ```
pub fn free_slots<Tz: TimeZone>(
    reference: &DateTime<Tz>,
    appointments: &[Appointment],
) -> Vec<DateTime<Tz>> {
    generate_slots(reference)
        .into_iter()
        .filter(|slot| {
            !appointments
                .iter()
                .any(|appointment| appointment.slot_instant == *slot)
        })
        .collect()
}

/// Same as [`free_slots`], serialised as RFC 3339 strings (`2024-06-01T09:00:00Z`).
///
/// Fractional seconds are printed only when the slot has them.
pub fn available_slots<Tz>(reference: &DateTime<Tz>, appointments: &[Appointment]) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    free_slots(reference, appointments)
        .iter()
        .map(|slot| slot.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        .collect()
}
