//! Property-based tests for the fahrgestell crate.
//!
//! Run with: `cargo test --test proptest_tests`

use fahrgestell::{Vin, validate};
use proptest::prelude::*;

const VIN_CHARS: &str = "[0-9A-HJ-NPR-Z]";

fn arb_vin() -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{VIN_CHARS}{{17}}")).unwrap()
}

proptest! {
    #[test]
    fn valid_vins_round_trip(raw in arb_vin()) {
        let vin = Vin::parse_at(&raw, 2020).unwrap();
        prop_assert_eq!(vin.wmi().len(), 3);
        prop_assert_eq!(vin.vds().len(), 6);
        prop_assert_eq!(vin.vis().len(), 8);
        prop_assert_eq!(
            format!("{}{}{}", vin.wmi(), vin.vds(), vin.vis()),
            vin.vin()
        );
    }

    #[test]
    fn lowercase_input_is_normalized(raw in arb_vin()) {
        let lower = Vin::parse_at(&raw.to_lowercase(), 2020).unwrap();
        let upper = Vin::parse_at(&raw, 2020).unwrap();
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn wrong_lengths_fail(raw in proptest::string::string_regex(
        &format!("{VIN_CHARS}{{0,16}}|{VIN_CHARS}{{18,40}}")
    ).unwrap()) {
        prop_assert!(validate(&raw).is_err());
    }

    #[test]
    fn forbidden_characters_fail(raw in arb_vin(), pos in 0usize..17, c in "[IOQ]") {
        let mut chars: Vec<char> = raw.chars().collect();
        chars[pos] = c.chars().next().unwrap();
        let raw: String = chars.into_iter().collect();
        prop_assert!(Vin::parse(&raw).is_err());
    }

    #[test]
    fn model_years_are_ascending_and_bounded(raw in arb_vin(), year in 1980i32..2100) {
        let vin = Vin::parse_at(&raw, year).unwrap();
        let years = vin.model_year();
        for window in years.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for &y in years {
            prop_assert!(y < year + 1, "{y} not realizable in {year}");
        }
    }

    #[test]
    fn country_implies_region(raw in arb_vin()) {
        let vin = Vin::parse_at(&raw, 2020).unwrap();
        if vin.country().is_some() {
            prop_assert!(vin.region().is_some());
        }
    }

    #[test]
    fn decoding_is_idempotent(raw in arb_vin()) {
        prop_assert_eq!(
            Vin::parse_at(&raw, 2020).unwrap(),
            Vin::parse_at(&raw, 2020).unwrap()
        );
    }
}
