use hotel_core::{Reservation, RoomRegistry};
use serde::Serialize;

/// Occupancy and revenue figures derived from current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HotelStatistics {
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    /// Sum of totals over confirmed reservations only
    pub revenue: i64,
}

impl HotelStatistics {
    pub fn collect<'a, I>(rooms: &RoomRegistry, reservations: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let total_rooms = rooms.len();
        let available_rooms = rooms.available_count();

        let mut total_bookings = 0;
        let mut confirmed_bookings = 0;
        let mut revenue = 0;

        for reservation in reservations {
            total_bookings += 1;
            if reservation.is_confirmed() {
                confirmed_bookings += 1;
                revenue += reservation.total_amount();
            }
        }

        Self {
            total_rooms,
            available_rooms,
            occupied_rooms: total_rooms - available_rooms,
            total_bookings,
            confirmed_bookings,
            revenue,
        }
    }
}
