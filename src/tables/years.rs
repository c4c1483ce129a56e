//! Model-year code assignments for VIN position 10.
//!
//! ISO 3779 reuses the year alphabet on a 30-year cycle (`I`, `O`, `Q`,
//! `U`, `Z` and `0` are never used), so the same code appears for several
//! calendar years. Ascending year order is observable behavior: the cyclic
//! walk in [`crate::decode::model_years`] depends on it.

/// `(calendar year, position-10 code)` pairs, ascending from 1980 through
/// the end of the currently defined span.
pub static YEARS: &[(i32, char)] = &[
    (1980, 'A'),
    (1981, 'B'),
    (1982, 'C'),
    (1983, 'D'),
    (1984, 'E'),
    (1985, 'F'),
    (1986, 'G'),
    (1987, 'H'),
    (1988, 'J'),
    (1989, 'K'),
    (1990, 'L'),
    (1991, 'M'),
    (1992, 'N'),
    (1993, 'P'),
    (1994, 'R'),
    (1995, 'S'),
    (1996, 'T'),
    (1997, 'V'),
    (1998, 'W'),
    (1999, 'X'),
    (2000, 'Y'),
    (2001, '1'),
    (2002, '2'),
    (2003, '3'),
    (2004, '4'),
    (2005, '5'),
    (2006, '6'),
    (2007, '7'),
    (2008, '8'),
    (2009, '9'),
    (2010, 'A'),
    (2011, 'B'),
    (2012, 'C'),
    (2013, 'D'),
    (2014, 'E'),
    (2015, 'F'),
    (2016, 'G'),
    (2017, 'H'),
    (2018, 'J'),
    (2019, 'K'),
    (2020, 'L'),
    (2021, 'M'),
    (2022, 'N'),
    (2023, 'P'),
    (2024, 'R'),
    (2025, 'S'),
    (2026, 'T'),
    (2027, 'V'),
    (2028, 'W'),
    (2029, 'X'),
    (2030, 'Y'),];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_vin_char;

    #[test]
    fn years_are_strictly_ascending() {
        for window in YEARS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "years out of order: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn codes_repeat_on_a_30_year_cycle() {
        for &(year, code) in YEARS {
            if let Ok(i) = YEARS.binary_search_by_key(&(year + 30), |&(y, _)| y) {
                assert_eq!(YEARS[i].1, code, "cycle broken at {year}");
            }
        }
    }

    #[test]
    fn codes_are_vin_characters() {
        for &(year, code) in YEARS {
            assert!(is_vin_char(code), "invalid code '{code}' for {year}");
            assert!(!matches!(code, 'U' | 'Z' | '0'));
        }
    }

    #[test]
    fn span() {
        assert_eq!(YEARS.first(), Some(&(1980, 'A')));
        assert_eq!(YEARS.last(), Some(&(2030, 'Y')));
        assert_eq!(YEARS.len(), 51);
    }
}
