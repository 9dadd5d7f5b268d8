use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::payment::PaymentMethod;
use crate::room::{Room, RoomCategory};
use crate::{CoreError, CoreResult};

/// Booking reference such as `BK1001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(prefix: &str, sequence: u64) -> Self {
        Self(format!("{}{}", prefix, sequence))
    }

    /// Normalize user input: trimmed, upper-cased, non-empty
    pub fn parse(input: &str) -> CoreResult<Self> {
        let id = input.trim().to_uppercase();
        if id.is_empty() {
            return Err(CoreError::ValidationError("booking id is empty".to_string()));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric suffix after `prefix`, if the id was generated with it
    pub fn sequence(&self, prefix: &str) -> Option<u64> {
        self.0.strip_prefix(prefix)?.parse().ok()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reservation status. Only `Confirmed -> Cancelled` is allowed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest's stay in one room. Everything except `status` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    booking_id: BookingId,
    guest_name: String,
    guest_email: String,
    room_number: u32,
    room_category: RoomCategory,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_amount: i64,
    payment_method: PaymentMethod,
    status: ReservationStatus,
}

impl Reservation {
    pub fn new(
        booking_id: BookingId,
        guest_name: impl Into<String>,
        guest_email: impl Into<String>,
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        payment_method: PaymentMethod,
    ) -> CoreResult<Self> {
        check_dates(check_in, check_out)?;

        let nights = (check_out - check_in).num_days();
        let room_category = room.category();

        Ok(Self {
            booking_id,
            guest_name: guest_name.into(),
            guest_email: guest_email.into(),
            room_number: room.number(),
            room_category,
            check_in,
            check_out,
            total_amount: nights * room_category.nightly_rate(),
            payment_method,
            status: ReservationStatus::Confirmed,
        })
    }

    pub fn booking_id(&self) -> &BookingId {
        &self.booking_id
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn guest_email(&self) -> &str {
        &self.guest_email
    }

    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    pub fn room_category(&self) -> RoomCategory {
        self.room_category
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn total_amount(&self) -> i64 {
        self.total_amount
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Re-validate a record that did not come through [`new`](Self::new),
    /// such as one read back from a snapshot.
    pub fn check_consistency(&self) -> CoreResult<()> {
        check_dates(self.check_in, self.check_out)?;

        let expected = self.nights() * self.room_category.nightly_rate();
        if self.total_amount != expected {
            return Err(CoreError::ValidationError(format!(
                "total {} does not match {} night(s) at {}",
                self.total_amount,
                self.nights(),
                self.room_category.nightly_rate()
            )));
        }
        Ok(())
    }

    /// Same record under another booking id
    pub fn rekeyed(mut self, booking_id: BookingId) -> Self {
        self.booking_id = booking_id;
        self
    }

    /// Mark as cancelled. Returns false if it already was.
    pub fn cancel(&mut self) -> bool {
        if self.status == ReservationStatus::Cancelled {
            return false;
        }
        self.status = ReservationStatus::Cancelled;
        true
    }
}

fn check_dates(check_in: NaiveDate, check_out: NaiveDate) -> CoreResult<()> {
    if check_out <= check_in {
        return Err(CoreError::ValidationError(format!(
            "check-out {} must be after check-in {}",
            check_out, check_in
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_reservation() -> Reservation {
        let room = Room::new(201, RoomCategory::Deluxe, "Ocean View");
        Reservation::new(
            BookingId::new("BK", 1001),
            "Maria Santos",
            "maria@example.com",
            &room,
            date(2025, 3, 10),
            date(2025, 3, 13),
            PaymentMethod::Card,
        )
        .unwrap()
    }

    #[test]
    fn test_new_reservation_is_confirmed() {
        let r = sample_reservation();

        assert!(r.is_confirmed());
        assert_eq!(r.nights(), 3);
        assert_eq!(r.total_amount(), 3 * 4800);
        assert_eq!(r.room_category(), RoomCategory::Deluxe);
        assert_eq!(r.booking_id().as_str(), "BK1001");
    }

    #[test]
    fn test_cancel_is_one_way() {
        let mut r = sample_reservation();

        assert!(r.cancel());
        assert_eq!(r.status(), ReservationStatus::Cancelled);
        assert!(!r.cancel());
        assert_eq!(r.status(), ReservationStatus::Cancelled);
        assert_eq!(r.total_amount(), 3 * 4800);
    }

    #[test]
    fn test_rejects_non_increasing_dates() {
        let room = Room::new(101, RoomCategory::Standard, "Garden View");
        let same_day = Reservation::new(
            BookingId::new("BK", 1),
            "A",
            "a@example.com",
            &room,
            date(2025, 1, 1),
            date(2025, 1, 1),
            PaymentMethod::Cash,
        );
        assert!(same_day.is_err());

        let backwards = Reservation::new(
            BookingId::new("BK", 2),
            "A",
            "a@example.com",
            &room,
            date(2025, 1, 5),
            date(2025, 1, 1),
            PaymentMethod::Cash,
        );
        assert!(backwards.is_err());
    }

    #[test]
    fn test_consistency_of_edited_records() {
        let r = sample_reservation();
        assert!(r.check_consistency().is_ok());

        let mut value = serde_json::to_value(&r).unwrap();
        value["total_amount"] = serde_json::json!(100);
        let wrong_total: Reservation = serde_json::from_value(value).unwrap();
        assert!(wrong_total.check_consistency().is_err());

        let mut value = serde_json::to_value(&r).unwrap();
        value["check_out"] = serde_json::json!("2025-03-10");
        let no_nights: Reservation = serde_json::from_value(value).unwrap();
        assert!(no_nights.check_consistency().is_err());
    }

    #[test]
    fn test_rekeyed_keeps_everything_else() {
        let r = sample_reservation();
        let moved = r.clone().rekeyed(BookingId::new("BK", 2001));

        assert_eq!(moved.booking_id().as_str(), "BK2001");
        assert_eq!(moved.guest_name(), r.guest_name());
        assert_eq!(moved.total_amount(), r.total_amount());
        assert_eq!(moved.status(), r.status());
    }

    #[test]
    fn test_booking_id_parse() {
        let id = BookingId::parse("  bk1002 ").unwrap();
        assert_eq!(id, BookingId::new("BK", 1002));
        assert_eq!(id.sequence("BK"), Some(1002));
        assert_eq!(BookingId::parse("X9").unwrap().sequence("BK"), None);
        assert!(BookingId::parse("   ").is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let r = sample_reservation();
        let value = serde_json::to_value(&r).unwrap();

        assert_eq!(value["booking_id"], "BK1001");
        assert_eq!(value["room_category"], "DELUXE");
        assert_eq!(value["check_in"], "2025-03-10");
        assert_eq!(value["payment_method"], "CARD");
        assert_eq!(value["status"], "CONFIRMED");

        let back: Reservation = serde_json::from_value(value).unwrap();
        assert_eq!(back, r);
    }
}
