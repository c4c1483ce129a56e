//! Derivation of region, country, manufacturer, and model years from
//! validated VIN segments.
//!
//! Every function here is total: a missing table entry is a normal `None`
//! or empty result, never an error. Validation failures are reported by
//! [`crate::validate`] before any derivation runs.

use crate::tables::{manufacturers, regions, years};

/// Geographic region assigned to the WMI's first character.
///
/// Many first characters are reserved or unassigned; those yield `None`.
pub fn region(wmi: &str) -> Option<&'static str> {
    let key = wmi.chars().next()?;
    regions::region_entry(key).map(|entry| entry.region)
}

/// Country assigned to the WMI's first two characters.
///
/// Only attempted when a region entry exists for the first character. The
/// region's country sets are scanned in declared order and the first set
/// containing the second character wins. Historical assignments overlap,
/// so the scan order is observable behavior.
pub fn country(wmi: &str) -> Option<&'static str> {
    let mut chars = wmi.chars();
    let first = chars.next()?;
    let second = chars.next()?;

    regions::region_entry(first)?
        .countries
        .iter()
        .find(|(set, _)| set.contains(second))
        .map(|&(_, name)| name)
}

/// Manufacturer assigned to the WMI.
///
/// Prefers an exact 3-character match, falls back to the 2-character
/// prefix. There is no 1-character fallback.
pub fn manufacturer(wmi: &str) -> Option<&'static str> {
    if let Some(name) = manufacturers::manufacturer(wmi) {
        return Some(name);
    }
    wmi.get(..2).and_then(manufacturers::manufacturer)
}

/// All plausible model years for the VIS's first character, ascending.
///
/// The year code repeats on a 30-year cycle, so a single character maps to
/// several calendar years. The walk over the year table is bounded by
/// `current_year + 1`: model years run at most one year ahead of
/// production, so later entries cannot be realized yet. Entries from the
/// cutoff year onward are never appended, even when their code matches.
///
/// `current_year` is injected by the caller; [`crate::Vin::parse`] feeds it
/// from the system clock, tests pin it.
pub fn model_years(code: char, current_year: i32) -> Vec<i32> {
    let cutoff = current_year + 1;
    let mut matches = Vec::new();

    for &(year, c) in years::YEARS {
        if year >= cutoff {
            break;
        }
        if c == code {
            matches.push(year);
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_known_and_unknown() {
        assert_eq!(region("WVW"), Some("Europe"));
        assert_eq!(region("JHM"), Some("Asia"));
        assert_eq!(region("1G1"), Some("North America"));
        // 'G' and 'H' are unassigned first characters.
        assert_eq!(region("G00"), None);
        assert_eq!(region("H00"), None);
    }

    #[test]
    fn country_first_match_wins() {
        assert_eq!(country("WVW"), Some("Germany"));
        assert_eq!(country("SAJ"), Some("United Kingdom"));
        assert_eq!(country("SNX"), Some("East Germany"));
        assert_eq!(country("SUX"), Some("Poland"));
        assert_eq!(country("S1X"), Some("Latvia"));
    }

    #[test]
    fn country_requires_region() {
        // No region entry for 'H' means no country either.
        assert_eq!(country("HAA"), None);
    }

    #[test]
    fn country_second_char_outside_all_sets() {
        // '7' region only assigns A-E to New Zealand.
        assert_eq!(country("7FA"), None);
    }

    #[test]
    fn manufacturer_prefers_three_char_match() {
        // "JA" alone is Isuzu, but "JA3" is assigned to Mitsubishi.
        assert_eq!(manufacturer("JA3"), Some("Mitsubishi"));
        assert_eq!(manufacturer("JAB"), Some("Isuzu"));
    }

    #[test]
    fn manufacturer_two_char_fallback() {
        // No 3-char entry for "JTD"; falls back to "JT".
        assert_eq!(manufacturer("JTD"), Some("Toyota"));
        assert_eq!(manufacturer("WVW"), Some("Volkswagen"));
    }

    #[test]
    fn manufacturer_unknown() {
        assert_eq!(manufacturer("000"), None);
    }

    #[test]
    fn model_years_cyclic_ambiguity() {
        // Current year 2020 (cutoff 2021): 'A' encodes both 1980 and 2010.
        assert_eq!(model_years('A', 2020), vec![1980, 2010]);
        assert_eq!(model_years('6', 2020), vec![2006]);
        assert_eq!(model_years('L', 2020), vec![1990, 2020]);
    }

    #[test]
    fn model_years_cutoff_excludes_boundary() {
        // 'M' encodes 1991 and 2021; with cutoff 2021 the second cycle
        // entry is never appended.
        assert_eq!(model_years('M', 2020), vec![1991]);
    }

    #[test]
    fn model_years_only_match_beyond_cutoff() {
        // 'G' first appears in 1986; with current year 1985 the walk halts
        // at the 1986 entry before it can match.
        assert_eq!(model_years('G', 1985), Vec::<i32>::new());
    }

    #[test]
    fn model_years_code_never_in_table() {
        // '0' is a valid VIN character but never encodes a model year.
        assert_eq!(model_years('0', 2020), Vec::<i32>::new());
        assert_eq!(model_years('U', 2020), Vec::<i32>::new());
    }
}
