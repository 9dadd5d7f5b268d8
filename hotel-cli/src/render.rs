//! Text layout for the console. Pure functions returning strings.

use hotel_booking::HotelStatistics;
use hotel_core::{Reservation, Room};

const CARD_RULE: &str = "  +--------------------------------------------------+";
const GUEST_COLUMN: usize = 18;

pub fn money(symbol: &str, amount: i64) -> String {
    format!("{}{:.2}", symbol, amount as f64)
}

pub fn banner(hotel_name: &str) -> String {
    let title = format!("{} SYSTEM v1.0", hotel_name.to_uppercase());
    let rule = format!("  {}", "=".repeat(42));
    format!("\n{}\n  {:^42}\n{}\n", rule, title, rule)
}

pub fn menu(hotel_name: &str) -> String {
    let rule = "+-------------------------------------+";
    let items = [
        "1. Search Available Rooms",
        "2. Make a Reservation",
        "3. View Booking Details",
        "4. Cancel Reservation",
        "5. List All Bookings",
        "6. Hotel Statistics",
        "7. Export Report to File",
        "0. Exit",
    ];

    let mut out = String::new();
    out.push_str(rule);
    out.push('\n');
    out.push_str(&format!("|{:^37}|\n", format!("{} SYSTEM", hotel_name.to_uppercase())));
    out.push_str(rule);
    out.push('\n');
    for item in items {
        out.push_str(&format!("|  {:<35}|\n", item));
    }
    out.push_str(rule);
    out.push('\n');
    out
}

pub fn room_line(room: &Room, symbol: &str) -> String {
    let category = room.category();
    format!(
        "  Room {:03} | {:<8} | {:<20} | {}{}/night | {}",
        room.number(),
        category.label(),
        room.description(),
        symbol,
        category.nightly_rate(),
        if room.is_available() { "[Available]" } else { "[Occupied] " }
    )
}

/// Boxed confirmation card for one reservation
pub fn booking_card(r: &Reservation, symbol: &str) -> String {
    let date = |d: chrono::NaiveDate| d.format("%b %-d, %Y").to_string();
    let row = |label: &str, value: &str| format!("  | {:<13}: {:<34}|", label, value);

    let lines = [
        String::new(),
        CARD_RULE.to_string(),
        "  |            BOOKING CONFIRMATION                  |".to_string(),
        CARD_RULE.to_string(),
        row("Booking ID", r.booking_id().as_str()),
        row("Status", r.status().as_str()),
        CARD_RULE.to_string(),
        row("Guest Name", r.guest_name()),
        row("Email", r.guest_email()),
        CARD_RULE.to_string(),
        row(
            "Room",
            &format!("{:03} ({})", r.room_number(), r.room_category().label()),
        ),
        row("Check-In", &date(r.check_in())),
        row("Check-Out", &date(r.check_out())),
        row("Nights", &r.nights().to_string()),
        CARD_RULE.to_string(),
        row("Rate/Night", &money(symbol, r.room_category().nightly_rate())),
        row("TOTAL AMOUNT", &money(symbol, r.total_amount())),
        row("Payment", r.payment_method().label()),
        CARD_RULE.to_string(),
        String::new(),
    ];
    lines.join("\n")
}

fn truncate_guest(name: &str) -> String {
    if name.chars().count() > GUEST_COLUMN {
        let head: String = name.chars().take(GUEST_COLUMN - 1).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    }
}

/// All bookings as a table, guest names clipped to the column
pub fn booking_table<'a, I>(reservations: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Reservation>,
{
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<10} {:<18} {:<6} {:<12} {:<12} {:<12} {:<10}\n",
        "ID", "Guest", "Room", "Check-In", "Check-Out", "Total", "Status"
    ));
    out.push_str(&format!("  {}\n", "-".repeat(82)));

    let mut count = 0;
    for r in reservations {
        count += 1;
        out.push_str(&format!(
            "  {:<10} {:<18} {:<6} {:<12} {:<12} {:<12} {:<10}\n",
            r.booking_id().as_str(),
            truncate_guest(r.guest_name()),
            r.room_number(),
            r.check_in().to_string(),
            r.check_out().to_string(),
            money(symbol, r.total_amount()),
            r.status().as_str(),
        ));
    }
    out.push_str(&format!("\n  Total: {} booking(s)\n", count));
    out
}

pub fn statistics(stats: &HotelStatistics, symbol: &str) -> String {
    let rule = "  +---------------------------------+";
    let row = |label: &str, value: String| format!("  | {:<16}: {:<14}|", label, value);

    [
        String::new(),
        rule.to_string(),
        "  |       HOTEL STATISTICS          |".to_string(),
        rule.to_string(),
        row("Total Rooms", stats.total_rooms.to_string()),
        row("Available", stats.available_rooms.to_string()),
        row("Occupied", stats.occupied_rooms.to_string()),
        row("Total Bookings", stats.total_bookings.to_string()),
        row("Confirmed", stats.confirmed_bookings.to_string()),
        row("Total Revenue", money(symbol, stats.revenue)),
        rule.to_string(),
        String::new(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hotel_core::{BookingId, PaymentMethod, RoomCategory};

    fn reservation(name: &str) -> Reservation {
        let room = Room::new(201, RoomCategory::Deluxe, "Ocean View");
        Reservation::new(
            BookingId::new("BK", 1001),
            name,
            "guest@example.com",
            &room,
            NaiveDate::from_ymd_opt(2025, 12, 24).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 26).unwrap(),
            PaymentMethod::GCash,
        )
        .unwrap()
    }

    #[test]
    fn test_room_line() {
        let room = Room::new(101, RoomCategory::Standard, "Garden View");
        assert_eq!(
            room_line(&room, "P"),
            "  Room 101 | Standard | Garden View          | P2500/night | [Available]"
        );
    }

    #[test]
    fn test_booking_card_rows_align() {
        let card = booking_card(&reservation("Maria Santos"), "P");

        assert!(card.contains("  | Booking ID   : BK1001"));
        assert!(card.contains("  | Room         : 201 (Deluxe)"));
        assert!(card.contains("  | Check-In     : Dec 24, 2025"));
        assert!(card.contains("  | TOTAL AMOUNT : P9600.00"));
        assert!(card.contains("  | Payment      : GCash"));
        for line in card.lines().filter(|l| l.starts_with("  |")) {
            assert_eq!(line.chars().count(), CARD_RULE.chars().count(), "{}", line);
        }
    }

    #[test]
    fn test_table_truncates_long_names() {
        let long = reservation("Maximiliano Alejandro Reyes");
        let table = booking_table([&long], "P");

        assert!(table.contains("Maximiliano Aleja…"));
        assert!(!table.contains("Reyes"));
        assert!(table.contains("Total: 1 booking(s)"));
    }

    #[test]
    fn test_statistics_box() {
        let stats = HotelStatistics {
            total_rooms: 13,
            available_rooms: 12,
            occupied_rooms: 1,
            total_bookings: 2,
            confirmed_bookings: 1,
            revenue: 5000,
        };
        let text = statistics(&stats, "P");

        assert!(text.contains("  | Total Revenue   : P5000.00      |"));
        assert!(text.contains("  | Occupied        : 1             |"));
    }
}
