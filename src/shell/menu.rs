use std::io::Write;

use crate::types::venue::VenueTable;

pub const LOCATION_PROMPT: &str = "Enter the number corresponding to your location: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please select a valid location number.";

const LEFT_COLUMN_WIDTH: usize = 35;

const HOSTILE_INPUT_BANNER: [&str; 7] = [
    "----",
    ">(')____,  >(')____,  >(')____,  >(')____,  >(') ___,",
    " (` =~~/    (` =~~/    (` =~~/    (` =~~/    (` =~~/",
    "~~~^~^`---'~^~^~^`---'~^~^~^`---'~^~^~^`---'~^~^~^`---'~^~dnsp",
    "Don't try to hack me! That's rude!",
    "I can't blame you for your curiosity, that's what hackers do.",
    "----",
];

/// What a line typed at the location prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    /// All digits; `None` when the number does not fit a venue id.
    Venue(Option<u32>),
    /// A stray yes/no answer, ignored at the menu.
    YesNo,
    Hostile,
}

pub fn classify_menu_input(input: &str) -> MenuChoice {
    if input == "0" {
        return MenuChoice::Quit;
    }

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return MenuChoice::Venue(input.parse::<u32>().ok());
    }

    match input {
        "yes" | "no" | "y" | "n" => MenuChoice::YesNo,
        _ => MenuChoice::Hostile,
    }
}

pub fn render_two_columns<W: Write>(out: &mut W, table: &VenueTable) -> std::io::Result<()> {
    let venues = table.venues();
    let rows = (venues.len() + 1) / 2;

    for i in 0..rows {
        let left = format!("{} - {}", venues[i].id, venues[i].name);
        let right = venues
            .get(rows + i)
            .map(|v| format!("{} - {}", v.id, v.name))
            .unwrap_or_default();
        writeln!(out, "{:<width$} {}", left, right, width = LEFT_COLUMN_WIDTH)?;
    }

    Ok(())
}

pub fn render_single_column<W: Write>(out: &mut W, table: &VenueTable) -> std::io::Result<()> {
    for venue in table.venues() {
        writeln!(out, "{} - {}", venue.id, venue.name)?;
    }

    Ok(())
}

pub fn render_hostile_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    for line in HOSTILE_INPUT_BANNER {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_menu_input() {
        assert_eq!(classify_menu_input("0"), MenuChoice::Quit);
        assert_eq!(classify_menu_input("7"), MenuChoice::Venue(Some(7)));
        assert_eq!(classify_menu_input("00"), MenuChoice::Venue(Some(0)));
        assert_eq!(
            classify_menu_input("99999999999999999999"),
            MenuChoice::Venue(None)
        );
        assert_eq!(classify_menu_input("y"), MenuChoice::YesNo);
        assert_eq!(classify_menu_input("no"), MenuChoice::YesNo);
        assert_eq!(classify_menu_input(""), MenuChoice::Hostile);
        assert_eq!(classify_menu_input("-1"), MenuChoice::Hostile);
        assert_eq!(classify_menu_input("1; DROP TABLE"), MenuChoice::Hostile);
        assert_eq!(classify_menu_input("YES"), MenuChoice::Hostile);
    }

    #[test]
    fn two_columns_pair_halves() {
        let mut out = Vec::new();
        render_two_columns(&mut out, &VenueTable::EXTENDED).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 16);
        assert_eq!(
            lines[0],
            format!("{:<35} {}", "1 - Las Vegas Convention Center", "17 - Paris Las Vegas")
        );
        assert_eq!(
            lines[15],
            format!("{:<35} {}", "16 - Bellagio Hotel", "32 - Las Vegas Airport")
        );
    }

    #[test]
    fn single_column_lists_every_venue() {
        let mut out = Vec::new();
        render_single_column(&mut out, &VenueTable::COMPACT).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.lines().count(), 20);
        assert!(out.starts_with("1 - Las Vegas Convention Center\n2 - Resort World\n"));
        assert!(out.ends_with("20 - Treasure Island\n"));
    }

    #[test]
    fn banner_is_fixed() {
        let mut out = Vec::new();
        render_hostile_banner(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out.lines().count(), 7);
        assert!(out.contains("Don't try to hack me! That's rude!\n"));
    }
}
