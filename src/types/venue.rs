#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Venue {
    pub id: u32,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn venue(id: u32, name: &'static str, latitude: f64, longitude: f64) -> Venue {
    Venue {
        id,
        name,
        latitude,
        longitude,
    }
}

/// Read-only venue list keyed by `Venue::id`.
#[derive(Debug, Clone, Copy)]
pub struct VenueTable {
    venues: &'static [Venue],
}

impl VenueTable {
    /// DEF CON 32 venues sorted by proximity to the convention center.
    pub const EXTENDED: VenueTable = VenueTable {
        venues: &EXTENDED_VENUES,
    };

    pub const COMPACT: VenueTable = VenueTable {
        venues: &COMPACT_VENUES,
    };

    pub fn lookup(&self, id: u32) -> Option<&'static Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn venues(&self) -> &'static [Venue] {
        self.venues
    }
}

const EXTENDED_VENUES: [Venue; 32] = [
    venue(1, "Las Vegas Convention Center", 36.1290, -115.1537),
    venue(2, "Westgate Las Vegas", 36.1360, -115.1518),
    venue(3, "Resort World", 36.1350, -115.1600),
    venue(4, "Tuscany Hotel", 36.1118, -115.1569),
    venue(5, "The Mirage", 36.1216, -115.1745),
    venue(6, "Wynn Las Vegas", 36.1273, -115.1655),
    venue(7, "The Venetian", 36.1216, -115.1694),
    venue(8, "The Palazzo", 36.1243, -115.1695),
    venue(9, "Treasure Island", 36.1245, -115.1703),
    venue(10, "High Roller", 36.1208, -115.1686),
    venue(11, "The LINQ Hotel + Experience", 36.1189, -115.1681),
    venue(12, "The Westin", 36.1195, -115.1672),
    venue(13, "Fashion Show Mall", 36.1273, -115.1702),
    venue(14, "Caesars Palace", 36.1178, -115.1745),
    venue(15, "Planet Hollywood", 36.1095, -115.1703),
    venue(16, "Bellagio Hotel", 36.1126, -115.1763),
    venue(17, "Paris Las Vegas", 36.1126, -115.1701),
    venue(18, "Aria Resort & Casino", 36.1070, -115.1763),
    venue(19, "The Cosmopolitan", 36.1097, -115.1741),
    venue(20, "Miracle Mile Shops", 36.1091, -115.1711),
    venue(21, "The Park", 36.1037, -115.1740),
    venue(22, "New York-New York Hotel", 36.1024, -115.1748),
    venue(23, "MGM Grand", 36.1026, -115.1703),
    venue(24, "Eataly Las Vegas", 36.1062, -115.1704),
    venue(25, "Mandalay Bay", 36.0909, -115.1761),
    venue(26, "Luxor Hotel", 36.0958, -115.1761),
    venue(27, "Rio Hotel and Casino", 36.1164, -115.1881),
    venue(28, "Sahara", 36.1422, -115.1544),
    venue(29, "Fontainebleau", 36.1363, -115.1634),
    venue(30, "Taco Bell Cantina", 36.1171, -115.1722),
    venue(31, "Encore at Wynn Las Vegas", 36.1289, -115.1627),
    venue(32, "Las Vegas Airport", 36.0840, -115.1537),
];

const COMPACT_VENUES: [Venue; 20] = [
    venue(1, "Las Vegas Convention Center", 36.1290, -115.1537),
    venue(2, "Resort World", 36.1350, -115.1600),
    venue(3, "Rio Hotel and Casino", 36.1164, -115.1881),
    venue(4, "Sahara", 36.1422, -115.1544),
    venue(5, "Fontainebleau", 36.1363, -115.1634),
    venue(6, "Tuscany Hotel", 36.1118, -115.1569),
    venue(7, "Las Vegas Airport", 36.0840, -115.1537),
    venue(8, "The Westin", 36.1195, -115.1672),
    venue(9, "Taco Bell Cantina", 36.1171, -115.1722),
    venue(10, "Westgate Las Vegas", 36.1360, -115.1518),
    venue(11, "MGM Grand", 36.1026, -115.1703),
    venue(12, "The Mirage", 36.1216, -115.1745),
    venue(13, "Caesars Palace", 36.1178, -115.1745),
    venue(14, "Bellagio Hotel", 36.1126, -115.1763),
    venue(15, "Mandalay Bay", 36.0909, -115.1761),
    venue(16, "Luxor Hotel", 36.0958, -115.1761),
    venue(17, "New York-New York Hotel", 36.1024, -115.1748),
    venue(18, "The Venetian", 36.1216, -115.1694),
    venue(19, "Wynn Las Vegas", 36.1273, -115.1655),
    venue(20, "Treasure Island", 36.1245, -115.1703),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lookup_finds_known_ids() {
        let venue = VenueTable::EXTENDED.lookup(1).unwrap();
        assert_eq!(venue.name, "Las Vegas Convention Center");
        assert_eq!(venue.latitude, 36.1290);
        assert_eq!(venue.longitude, -115.1537);

        assert_eq!(VenueTable::COMPACT.lookup(20).unwrap().name, "Treasure Island");
        assert_eq!(VenueTable::EXTENDED.lookup(32).unwrap().name, "Las Vegas Airport");
    }

    #[test]
    fn lookup_misses_outside_key_range() {
        assert!(VenueTable::EXTENDED.lookup(0).is_none());
        assert!(VenueTable::EXTENDED.lookup(33).is_none());
        assert!(VenueTable::COMPACT.lookup(21).is_none());
    }

    #[test]
    fn ids_are_contiguous_and_unique() {
        for table in [VenueTable::EXTENDED, VenueTable::COMPACT] {
            let ids = table.venues().iter().map(|v| v.id).collect::<HashSet<u32>>();
            let count = table.venues().len();
            assert_eq!(ids.len(), count);
            assert!((1..=count as u32).all(|id| ids.contains(&id)));
        }
    }
}
