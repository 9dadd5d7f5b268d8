use hotel_booking::{BookingManager, BookingRequest};
use hotel_core::{PaymentMethod, RoomCategory};
use hotel_store::app_config::HotelConfig;
use hotel_store::ReportWriter;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use crate::error::InputError;
use crate::input::Prompter;
use crate::render;

/// Result of one menu action
enum Flow {
    Continue,
    Exit,
}

/// Interactive menu session over a booking manager
pub struct Console<R, W> {
    manager: BookingManager,
    reports: ReportWriter,
    hotel: HotelConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(manager: BookingManager, reports: ReportWriter, hotel: HotelConfig, input: R, output: W) -> Self {
        Self {
            manager,
            reports,
            hotel,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (BookingManager, W) {
        (self.manager, self.prompter.into_output())
    }

    fn say(&mut self, text: impl AsRef<str>) -> Result<(), InputError> {
        writeln!(self.prompter.output(), "{}", text.as_ref())?;
        Ok(())
    }

    /// Run until the user picks `0` or input ends. Only I/O failures escape.
    pub fn run(&mut self) -> Result<(), InputError> {
        let banner = render::banner(&self.hotel.name);
        self.say(banner)?;

        loop {
            let menu = render::menu(&self.hotel.name);
            write!(self.prompter.output(), "{}", menu)?;

            let outcome = match self.prompter.ask("Choice") {
                Ok(choice) => self.dispatch(choice.trim()),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(InputError::Eof) => {
                    debug!("Input closed, leaving menu loop");
                    self.say("")?;
                    break;
                }
                Err(e) if e.is_recoverable() => {
                    self.say(format!("  {}\n", e))?;
                }
                Err(e) => return Err(e),
            }
        }

        self.say("\n  Goodbye!\n")
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, InputError> {
        match choice {
            "1" => self.search_rooms()?,
            "2" => self.make_booking()?,
            "3" => self.view_booking()?,
            "4" => self.cancel_booking()?,
            "5" => self.list_bookings()?,
            "6" => self.show_statistics()?,
            "7" => self.export_report()?,
            "0" => return Ok(Flow::Exit),
            _ => self.say("\n  Invalid choice.\n")?,
        }
        Ok(Flow::Continue)
    }

    fn search_rooms(&mut self) -> Result<(), InputError> {
        self.say("\n  Filter: [1] All  [2] Standard  [3] Deluxe  [4] Suite")?;
        let filter = match self.prompter.ask("Filter")?.trim() {
            "2" => Some(RoomCategory::Standard),
            "3" => Some(RoomCategory::Deluxe),
            "4" => Some(RoomCategory::Suite),
            _ => None,
        };

        let symbol = &self.hotel.currency_symbol;
        let lines: Vec<String> = self
            .manager
            .search_rooms(filter)
            .into_iter()
            .map(|room| render::room_line(room, symbol))
            .collect();

        self.say("")?;
        if lines.is_empty() {
            return self.say("  No available rooms.\n");
        }
        for line in &lines {
            self.say(line)?;
        }
        self.say(format!("\n  {} room(s) available.\n", lines.len()))
    }

    fn make_booking(&mut self) -> Result<(), InputError> {
        self.say("\n--- New Reservation ---")?;
        let guest_name = self.prompter.ask("Guest name")?;
        if guest_name.trim().is_empty() {
            return Err(InputError::BlankName);
        }
        let guest_email = self.prompter.ask("Email")?;

        self.search_rooms()?;

        let room_number = self.prompter.ask_room_number("Room number")?;
        let check_in = self.prompter.ask_date("Check-in  (yyyy-MM-dd)")?;
        let check_out = self.prompter.ask_date("Check-out (yyyy-MM-dd)")?;

        self.say("  Payment: [1] Card  [2] GCash  [3] Cash")?;
        let payment_method = PaymentMethod::from_choice(&self.prompter.ask("Choose")?);

        let request = BookingRequest {
            guest_name: guest_name.trim().to_string(),
            guest_email: guest_email.trim().to_string(),
            room_number,
            check_in,
            check_out,
            payment_method,
        };

        match self.manager.book(request) {
            Ok(reservation) => {
                let symbol = self.hotel.currency_symbol.clone();
                let amount = render::money(&symbol, reservation.total_amount());
                self.say("\n  Processing payment...")?;
                self.say(format!("  {}\n", payment_method.acknowledgement(&amount)))?;
                self.say(render::booking_card(&reservation, &symbol))
            }
            Err(e) => {
                warn!("Booking failed: {}", e);
                self.say(format!("\n  Booking failed: {}\n", e))
            }
        }
    }

    fn view_booking(&mut self) -> Result<(), InputError> {
        let booking_id = self.prompter.ask_booking_id("Booking ID")?;
        let card = self
            .manager
            .find(&booking_id)
            .map(|r| render::booking_card(r, &self.hotel.currency_symbol));

        match card {
            Some(card) => self.say(card),
            None => self.say("\n  Booking not found.\n"),
        }
    }

    fn cancel_booking(&mut self) -> Result<(), InputError> {
        let booking_id = self.prompter.ask_booking_id("Booking ID to cancel")?;
        let (guest, room, confirmed) = match self.manager.find(&booking_id) {
            Some(r) => (r.guest_name().to_string(), r.room_number(), r.is_confirmed()),
            None => return self.say("\n  Booking not found.\n"),
        };
        if !confirmed {
            return self.say("\n  Already cancelled.\n");
        }

        write!(
            self.prompter.output(),
            "\n  Cancel booking for {} (Room {})? Type YES to confirm: ",
            guest, room
        )?;
        let answer = self.prompter.read_line()?;

        if answer.trim().eq_ignore_ascii_case("yes") && self.manager.cancel(&booking_id) {
            self.say(format!("  Booking {} cancelled. Room is now available.\n", booking_id))
        } else {
            self.say("  Cancellation aborted.\n")
        }
    }

    fn list_bookings(&mut self) -> Result<(), InputError> {
        if self.manager.is_empty() {
            return self.say("\n  No reservations found.\n");
        }
        let table = render::booking_table(self.manager.reservations(), &self.hotel.currency_symbol);
        self.say("")?;
        self.say(table)
    }

    fn show_statistics(&mut self) -> Result<(), InputError> {
        let stats = self.manager.statistics();
        let text = render::statistics(&stats, &self.hotel.currency_symbol);
        self.say(text)
    }

    fn export_report(&mut self) -> Result<(), InputError> {
        match self.reports.export(self.manager.reservations()) {
            Ok(path) => self.say(format!("  Report exported to {}", path.display())),
            Err(e) => {
                warn!("Export failed: {}", e);
                self.say(format!("  Export failed: {}", e))
            }
        }
    }
}
