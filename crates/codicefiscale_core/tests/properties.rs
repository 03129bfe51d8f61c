use codicefiscale_core::{
    bundled_tables, compute_cin, decode_omocodia, digit_to_letter, encode_omocodia,
    letter_to_digit, normalize, Decoder, FixedClock, Sex,
};
use proptest::prelude::*;

const CURRENT_YEAR: i32 = 2025;
const MONTHS: &str = "ABCDEHLMPRST";

/// Fifteen-character prefixes with a known place and a valid day field.
fn code_prefix() -> impl Strategy<Value = String> {
    (
        "[A-Z]{6}",
        0u32..100,
        0usize..12,
        1u32..=28,
        any::<bool>(),
        prop::sample::select(vec!["H501", "G048", "F205", "Z103", "Z602"]),
    )
        .prop_map(|(names, year, month, day, female, place)| {
            let day = if female { day + 40 } else { day };
            let month = MONTHS.as_bytes()[month] as char;
            format!("{names}{year:02}{month}{day:02}{place}")
        })
}

/// Replaces digits at substitutable positions according to `mask`.
fn letterize(prefix: &str, mask: u8) -> String {
    const POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];
    prefix
        .chars()
        .enumerate()
        .map(|(index, c)| match POSITIONS.iter().position(|p| *p == index) {
            Some(bit) if mask & (1 << bit) != 0 => digit_to_letter(c),
            _ => c,
        })
        .collect()
}

proptest! {
    /// Normalization is idempotent on accented Latin text.
    #[test]
    fn normalize_is_idempotent(input in "[a-zA-Z0-9àèéìòùÀÈÉÌÒÙçñÿ\u{0300}\u{0301} ]{0,32}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Omocodia mappings are inverse on their tables and identity elsewhere.
    #[test]
    fn omocodia_mappings_are_inverse(c in any::<char>()) {
        if "LMNPQRSTUV".contains(c) {
            prop_assert_eq!(digit_to_letter(letter_to_digit(c)), c);
        } else if c.is_ascii_digit() {
            prop_assert_eq!(letter_to_digit(digit_to_letter(c)), c);
        } else {
            prop_assert_eq!(letter_to_digit(c), c);
            prop_assert_eq!(digit_to_letter(c), c);
        }
    }

    /// Encoding digits then decoding restores them.
    #[test]
    fn digit_strings_survive_omocodia(digits in "[0-9]{0,8}") {
        prop_assert_eq!(decode_omocodia(&encode_omocodia(&digits)), digits);
    }

    /// Every accepted code carries the CIN of its prefix, and decoded
    /// components stay within calendar bounds.
    #[test]
    fn accepted_codes_satisfy_record_invariants(prefix in code_prefix(), mask in 0u8..128) {
        let prefix = letterize(&prefix, mask);
        let cin = compute_cin(&prefix).unwrap();
        let code = format!("{prefix}{cin}");

        let decoder = Decoder::new(bundled_tables().unwrap()).with_clock(FixedClock(CURRENT_YEAR));
        let cf = decoder.decode(&code).unwrap();

        prop_assert_eq!(compute_cin(&cf.code[..15]).unwrap(), cf.code.chars().last().unwrap());
        prop_assert!((1..=12).contains(&cf.birth_month));
        prop_assert!((1..=31).contains(&cf.birth_day));
        prop_assert!(cf.birth_year <= CURRENT_YEAR);
        prop_assert_eq!(cf.sex == Sex::Female, raw_day_is_female(&cf.raw.birth_day));
        prop_assert!(!cf.birth_place_country.name_it.is_empty());
        prop_assert_eq!(
            cf.birth_place_municipality.is_some(),
            cf.birth_place_country.name_it == "Italia"
        );
    }

    /// A wrong trailing character is always rejected.
    #[test]
    fn wrong_cin_is_rejected(prefix in code_prefix(), shift in 1u8..26) {
        let cin = compute_cin(&prefix).unwrap();
        let wrong = (b'A' + ((cin as u8 - b'A' + shift) % 26)) as char;
        let decoder = Decoder::new(bundled_tables().unwrap()).with_clock(FixedClock(CURRENT_YEAR));
        let code = format!("{prefix}{wrong}");
        prop_assert!(decoder.decode(&code).is_err());
    }
}

fn raw_day_is_female(raw_day: &str) -> bool {
    decode_omocodia(raw_day).parse::<u32>().unwrap() > 40
}
