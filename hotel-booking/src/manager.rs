use chrono::NaiveDate;
use hotel_core::{
    BookingId, CoreError, PaymentMethod, Reservation, ReservationStore, RoomCategory, RoomError,
    RoomRegistry, Room,
};
use indexmap::IndexMap;
use tracing::{error, info, warn};

use crate::sequence::IdSequence;
use crate::stats::HotelStatistics;

/// Everything needed to book one room
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub guest_name: String,
    pub guest_email: String,
    pub room_number: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub payment_method: PaymentMethod,
}

/// Problems found while re-hydrating a snapshot. The records are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadConflict {
    /// A second confirmed reservation for a room that is already held
    DoubleBooked {
        booking_id: BookingId,
        room_number: u32,
        held_by: BookingId,
    },
    /// Confirmed reservation for a room the hotel does not have
    UnknownRoom {
        booking_id: BookingId,
        room_number: u32,
    },
    /// Same booking id twice in the snapshot. The first record keeps the id,
    /// the later one is kept under a freshly generated id.
    DuplicateId {
        original: BookingId,
        reassigned: BookingId,
    },
    /// Dates or total that could not have come from a booking
    Inconsistent {
        booking_id: BookingId,
        reason: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub confirmed: usize,
    pub conflicts: Vec<LoadConflict>,
    /// Set when the snapshot could not be read and the manager started empty
    pub read_error: Option<String>,
}

/// Owns the room catalog and the reservation set, and keeps the two consistent
pub struct BookingManager {
    rooms: RoomRegistry,
    reservations: IndexMap<BookingId, Reservation>,
    ids: IdSequence,
    store: Box<dyn ReservationStore>,
}

impl BookingManager {
    /// Empty manager over the seeded catalog. Call [`load`](Self::load) to pick up a snapshot.
    pub fn new(store: Box<dyn ReservationStore>, id_prefix: &str, id_base: u64) -> Self {
        Self {
            rooms: RoomRegistry::seeded(),
            reservations: IndexMap::new(),
            ids: IdSequence::new(id_prefix, id_base),
            store,
        }
    }

    /// Construct and re-hydrate from the store in one step
    pub fn open(store: Box<dyn ReservationStore>, id_prefix: &str, id_base: u64) -> (Self, LoadSummary) {
        let mut manager = Self::new(store, id_prefix, id_base);
        let summary = manager.load();
        (manager, summary)
    }

    /// Replace in-memory state with the stored snapshot and re-derive room availability.
    ///
    /// Read failures degrade to an empty set; they never fail the caller.
    pub fn load(&mut self) -> LoadSummary {
        self.rooms = RoomRegistry::seeded();
        self.reservations.clear();

        let mut summary = LoadSummary::default();
        let saved = match self.store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Could not load saved reservations, starting empty: {}", e);
                summary.read_error = Some(e.to_string());
                Vec::new()
            }
        };

        // Seed past every stored id first so re-keyed duplicates cannot collide
        self.ids.reseed(saved.iter().map(|r| r.booking_id()));

        // room number -> confirmed booking currently holding it
        let mut holders: IndexMap<u32, BookingId> = IndexMap::new();

        for mut reservation in saved {
            if self.reservations.contains_key(reservation.booking_id()) {
                let original = reservation.booking_id().clone();
                let (seq, reassigned) = self.ids.peek(|id| self.reservations.contains_key(id));
                self.ids.commit(seq);
                warn!(
                    "Duplicate booking id {} in snapshot, keeping the later record as {}",
                    original, reassigned
                );
                summary.conflicts.push(LoadConflict::DuplicateId {
                    original,
                    reassigned: reassigned.clone(),
                });
                reservation = reservation.rekeyed(reassigned);
            }
            let booking_id = reservation.booking_id().clone();

            if let Err(e) = reservation.check_consistency() {
                warn!("Booking {} is inconsistent: {}", booking_id, e);
                summary.conflicts.push(LoadConflict::Inconsistent {
                    booking_id: booking_id.clone(),
                    reason: e.to_string(),
                });
            }

            if reservation.is_confirmed() {
                summary.confirmed += 1;
                let room_number = reservation.room_number();

                if let Some(held_by) = holders.get(&room_number) {
                    warn!(
                        "Booking {} double-books room {} (already held by {})",
                        booking_id, room_number, held_by
                    );
                    summary.conflicts.push(LoadConflict::DoubleBooked {
                        booking_id: booking_id.clone(),
                        room_number,
                        held_by: held_by.clone(),
                    });
                } else if self.rooms.set_availability(room_number, false).is_ok() {
                    holders.insert(room_number, booking_id.clone());
                } else {
                    warn!("Booking {} references unknown room {}", booking_id, room_number);
                    summary.conflicts.push(LoadConflict::UnknownRoom {
                        booking_id: booking_id.clone(),
                        room_number,
                    });
                }
            }

            self.reservations.insert(booking_id, reservation);
        }

        summary.loaded = self.reservations.len();

        if summary.loaded > 0 {
            info!(
                "Restored {} reservation(s), {} confirmed, next id after {}{}",
                summary.loaded,
                summary.confirmed,
                self.ids.prefix(),
                self.ids.current()
            );
        }
        summary
    }

    /// Validate, create a confirmed reservation, occupy the room and persist.
    ///
    /// Checks run before any mutation, so an error leaves all state untouched.
    pub fn book(&mut self, request: BookingRequest) -> Result<Reservation, BookingError> {
        let room = self
            .rooms
            .find(request.room_number)
            .ok_or(BookingError::RoomNotFound(request.room_number))?;

        if !room.is_available() {
            return Err(BookingError::AlreadyOccupied(request.room_number));
        }

        if request.check_out <= request.check_in {
            return Err(BookingError::InvalidDateRange {
                check_in: request.check_in,
                check_out: request.check_out,
            });
        }

        let (seq, booking_id) = self.ids.peek(|id| self.reservations.contains_key(id));
        let reservation = Reservation::new(
            booking_id.clone(),
            request.guest_name,
            request.guest_email,
            room,
            request.check_in,
            request.check_out,
            request.payment_method,
        )?;

        self.ids.commit(seq);
        self.rooms.set_availability(request.room_number, false)?;
        self.reservations.insert(booking_id, reservation.clone());

        info!(
            "Booking {} confirmed: room {} for {} night(s), total {}",
            reservation.booking_id(),
            reservation.room_number(),
            reservation.nights(),
            reservation.total_amount()
        );

        self.persist();
        Ok(reservation)
    }

    /// Cancel a confirmed reservation and free its room.
    ///
    /// Returns false, changing nothing, for unknown or already cancelled ids.
    pub fn cancel(&mut self, booking_id: &BookingId) -> bool {
        let Some(reservation) = self.reservations.get_mut(booking_id) else {
            return false;
        };

        if !reservation.cancel() {
            return false;
        }

        let room_number = reservation.room_number();
        let still_held = self
            .reservations
            .values()
            .any(|r| r.is_confirmed() && r.room_number() == room_number);

        if still_held {
            warn!(
                "Cancelled {} but room {} is still held by another confirmed booking",
                booking_id, room_number
            );
        } else if self.rooms.set_availability(room_number, true).is_err() {
            warn!("Cancelled {} for unknown room {}", booking_id, room_number);
        }

        info!("Booking {} cancelled (room {})", booking_id, room_number);
        self.persist();
        true
    }

    pub fn find(&self, booking_id: &BookingId) -> Option<&Reservation> {
        self.reservations.get(booking_id)
    }

    /// All reservations, any status, in booking order
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.find(number)
    }

    pub fn search_rooms(&self, category: Option<RoomCategory>) -> Vec<&Room> {
        self.rooms.search(category)
    }

    pub fn statistics(&self) -> HotelStatistics {
        HotelStatistics::collect(&self.rooms, self.reservations.values())
    }

    /// Flush the full set. Failures are logged; memory stays authoritative.
    fn persist(&self) {
        let snapshot: Vec<Reservation> = self.reservations.values().cloned().collect();
        if let Err(e) = self.store.save(&snapshot) {
            error!("Could not save reservations: {}", e);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Room {0} does not exist.")]
    RoomNotFound(u32),

    #[error("Room {0} is already occupied.")]
    AlreadyOccupied(u32),

    #[error("Check-out ({check_out}) must be after check-in ({check_in}).")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<RoomError> for BookingError {
    fn from(err: RoomError) -> Self {
        match err {
            RoomError::NotFound(number) => BookingError::RoomNotFound(number),
        }
    }
}
