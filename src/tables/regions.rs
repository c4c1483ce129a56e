//! WMI region and country assignments.
//!
//! Keyed by the VIN's first character; `G`, `H` and `I` have no assignment
//! (`I` is not even a VIN character). Each entry lists the countries for
//! that key as `(character set, country)` pairs tested against the VIN's
//! second character. The pairs are ORDERED and the first matching set wins;
//! historical assignments overlap, so the declared order is observable
//! behavior — never sort this data or turn it into a map.

/// One region assignment: a first-character key, the region name, and the
/// ordered country character sets for the second character.
#[derive(Debug)]
pub struct RegionEntry {
    /// VIN first character this entry covers.
    pub key: char,
    /// Region name.
    pub region: &'static str,
    /// Ordered `(second-character set, country)` pairs.
    pub countries: &'static [(&'static str, &'static str)],
}

/// Find the region entry for a VIN first character.
pub fn region_entry(key: char) -> Option<&'static RegionEntry> {
    REGIONS.iter().find(|entry| entry.key == key)
}

/// All region assignments, grouped by region as the reference dataset
/// declares them.
pub static REGIONS: &[RegionEntry] = &[
    RegionEntry {
        key: 'A',
        region: "Africa",
        countries: &[("ABCDEFGH", "South Africa"), ("JKLMN", "Ivory Coast")],
    },
    RegionEntry {
        key: 'B',
        region: "Africa",
        countries: &[
            ("ABCDE", "Angola"),
            ("FGHJK", "Kenya"),
            ("LMNPR", "Tanzania"),
        ],
    },
    RegionEntry {
        key: 'C',
        region: "Africa",
        countries: &[
            ("ABCDE", "Benin"),
            ("FGHJK", "Madagascar"),
            ("LMNPR", "Tunisia"),
        ],
    },
    RegionEntry {
        key: 'D',
        region: "Africa",
        countries: &[
            ("ABCDE", "Egypt"),
            ("FGHJK", "Morocco"),
            ("LMNPR", "Zambia"),
        ],
    },
    RegionEntry {
        key: 'E',
        region: "Africa",
        countries: &[("ABCDE", "Ethiopia"), ("FGHJK", "Mozambique")],
    },
    RegionEntry {
        key: 'F',
        region: "Africa",
        countries: &[("ABCDE", "Ghana"), ("FGHJK", "Nigeria")],
    },
    RegionEntry {
        key: 'J',
        region: "Asia",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "Japan")],
    },
    RegionEntry {
        key: 'K',
        region: "Asia",
        countries: &[
            ("ABCDE", "Sri Lanka"),
            ("FGHJK", "Israel"),
            ("LMNPR", "South Korea"),
            ("STUVWXYZ1234567890", "Kazakhstan"),
        ],
    },
    RegionEntry {
        key: 'L',
        region: "Asia",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "China")],
    },
    RegionEntry {
        key: 'M',
        region: "Asia",
        countries: &[
            ("ABCDE", "India"),
            ("FGHJK", "Indonesia"),
            ("LMNPR", "Thailand"),
            ("STUVWXYZ1234567890", "Myanmar"),
        ],
    },
    RegionEntry {
        key: 'N',
        region: "Asia",
        countries: &[
            ("ABCDE", "Iran"),
            ("FGHJK", "Pakistan"),
            ("LMNPR", "Turkey"),
        ],
    },
    RegionEntry {
        key: 'P',
        region: "Asia",
        countries: &[
            ("ABCDE", "Philippines"),
            ("FGHJK", "Singapore"),
            ("LMNPR", "Malaysia"),
        ],
    },
    RegionEntry {
        key: 'R',
        region: "Asia",
        countries: &[
            ("ABCDE", "United Arab Emirates"),
            ("FGHJK", "Taiwan"),
            ("LMNPR", "Vietnam"),
            ("STUVWXYZ1234567890", "Saudi Arabia"),
        ],
    },
    RegionEntry {
        key: 'S',
        region: "Europe",
        countries: &[
            ("ABCDEFGHJKLM", "United Kingdom"),
            ("NPRST", "East Germany"),
            ("UVWXYZ", "Poland"),
            ("1234", "Latvia"),
        ],
    },
    RegionEntry {
        key: 'T',
        region: "Europe",
        countries: &[
            ("ABCDEFGH", "Switzerland"),
            ("JKLMNP", "Czech Republic"),
            ("RSTUV", "Hungary"),
            ("WXYZ1", "Portugal"),
        ],
    },
    RegionEntry {
        key: 'U',
        region: "Europe",
        countries: &[
            ("HJKLM", "Denmark"),
            ("NPRST", "Ireland"),
            ("UVWXYZ", "Romania"),
            ("567", "Slovakia"),
        ],
    },
    RegionEntry {
        key: 'V',
        region: "Europe",
        countries: &[
            ("ABCDE", "Austria"),
            ("FGHJKLMNPR", "France"),
            ("STUVW", "Spain"),
            ("XYZ12", "Serbia"),
            ("345", "Croatia"),
            ("67890", "Estonia"),
        ],
    },
    RegionEntry {
        key: 'W',
        region: "Europe",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "Germany")],
    },
    RegionEntry {
        key: 'X',
        region: "Europe",
        countries: &[
            ("ABCDE", "Bulgaria"),
            ("FGHJK", "Greece"),
            ("LMNPR", "Netherlands"),
            ("STUVW", "Russia (USSR)"),
            ("XYZ12", "Luxembourg"),
            ("34567890", "Russia"),
        ],
    },
    RegionEntry {
        key: 'Y',
        region: "Europe",
        countries: &[
            ("ABCDE", "Belgium"),
            ("FGHJK", "Finland"),
            ("LMNPR", "Malta"),
            ("STUVW", "Sweden"),
            ("XYZ12", "Norway"),
            ("345", "Belarus"),
            ("67890", "Ukraine"),
        ],
    },
    RegionEntry {
        key: 'Z',
        region: "Europe",
        countries: &[
            ("ABCDEFGHJKLMNPR", "Italy"),
            ("XYZ12", "Slovenia"),
            ("345", "Lithuania"),
        ],
    },
    RegionEntry {
        key: '1',
        region: "North America",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "USA")],
    },
    RegionEntry {
        key: '2',
        region: "North America",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "Canada")],
    },
    RegionEntry {
        key: '3',
        region: "North America",
        countries: &[
            ("ABCDEFGHJKLMNPRSTUVW", "Mexico"),
            ("XYZ1234567", "Costa Rica"),
            ("890", "Cayman Islands"),
        ],
    },
    RegionEntry {
        key: '4',
        region: "North America",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "USA")],
    },
    RegionEntry {
        key: '5',
        region: "North America",
        countries: &[("ABCDEFGHJKLMNPRSTUVWXYZ1234567890", "USA")],
    },
    RegionEntry {
        key: '6',
        region: "Oceania",
        countries: &[("ABCDEFGHJKLMNPRSTUVW", "Australia")],
    },
    RegionEntry {
        key: '7',
        region: "Oceania",
        countries: &[("ABCDE", "New Zealand")],
    },
    RegionEntry {
        key: '8',
        region: "South America",
        countries: &[
            ("ABCDE", "Argentina"),
            ("FGHJK", "Chile"),
            ("LMNPR", "Ecuador"),
            ("STUVW", "Peru"),
            ("XYZ12", "Venezuela"),
        ],
    },
    RegionEntry {
        key: '9',
        region: "South America",
        countries: &[
            ("ABCDE", "Brazil"),
            ("FGHJK", "Colombia"),
            ("LMNPR", "Paraguay"),
            ("STUVW", "Uruguay"),
            ("XYZ12", "Trinidad & Tobago"),
            ("3456789", "Brazil"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_vin_char;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_vin_characters() {
        let mut seen = HashSet::new();
        for entry in REGIONS {
            assert!(is_vin_char(entry.key), "bad key '{}'", entry.key);
            assert!(seen.insert(entry.key), "duplicate key '{}'", entry.key);
        }
    }

    #[test]
    fn character_sets_use_vin_characters_only() {
        for entry in REGIONS {
            for &(set, country) in entry.countries {
                assert!(!country.is_empty());
                assert!(
                    set.chars().all(is_vin_char),
                    "bad character set for {country}: {set}"
                );
            }
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(region_entry('W').map(|e| e.region), Some("Europe"));
        assert_eq!(region_entry('1').map(|e| e.region), Some("North America"));
        assert!(region_entry('G').is_none());
        assert!(region_entry('0').is_none());
    }
}
