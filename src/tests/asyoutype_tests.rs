use log::trace;

use crate::AsYouTypeFormatter;

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logging() {
    ONCE.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Feeds `keystrokes` one character at a time and checks the output after
/// every single one.
fn assert_formats_as(region: &str, keystrokes: &str, expected: &[&str]) {
    init_logging();
    assert_eq!(keystrokes.chars().count(), expected.len());
    let mut formatter = AsYouTypeFormatter::new(region);
    for (next_char, expected_output) in keystrokes.chars().zip(expected) {
        let output = formatter.insert_character(next_char, false);
        trace!("{region}: {next_char:?} -> {output}");
        assert_eq!(output, *expected_output, "after entering {next_char:?}");
    }
}

#[test]
fn us_number_in_national_format() {
    assert_formats_as(
        RegionCode::us(),
        "6502532222",
        &[
            "6",
            "65",
            "(650",
            "(650) 2",
            "(650) 25",
            "(650) 253",
            // The seven digits so far are a complete local number and win
            // over the ten-digit layout in progress.
            "650-2532",
            "(650) 253-22",
            "(650) 253-222",
            "(650) 253-2222",
        ],
    );
}

#[test]
fn us_number_with_trunk_prefix() {
    assert_formats_as(
        RegionCode::us(),
        "16502532222",
        &[
            "1",
            "16",
            "1 65",
            "1 650",
            "1 650 2",
            "1 650 25",
            "1 650 253",
            "1 650 253 2",
            "1 650 253 22",
            "1 650 253 222",
            "1 650 253 2222",
        ],
    );
}

#[test]
fn us_number_dialed_with_idd() {
    assert_formats_as(
        RegionCode::us(),
        "011442083661177",
        &[
            "0",
            "01",
            "011 ",
            "011 4",
            "011 44 ",
            "011 44 2",
            "011 44 20",
            "011 44 20 8",
            "011 44 20 83",
            "011 44 20 836",
            "011 44 20 8366",
            "011 44 20 8366 1",
            "011 44 20 8366 11",
            "011 44 20 8366 117",
            "011 44 20 8366 1177",
        ],
    );
}

#[test]
fn gb_number_dialed_with_plus_sign_from_us() {
    assert_formats_as(
        RegionCode::us(),
        "+442083661177",
        &[
            "+",
            "+4",
            "+44 ",
            "+44 2",
            "+44 20",
            "+44 20 8",
            "+44 20 83",
            "+44 20 836",
            "+44 20 8366",
            "+44 20 8366 1",
            "+44 20 8366 11",
            "+44 20 8366 117",
            "+44 20 8366 1177",
        ],
    );
}

#[test]
fn gb_number_with_trunk_prefix() {
    assert_formats_as(
        RegionCode::gb(),
        "02083661177",
        &[
            "0",
            "02",
            "020",
            "020 8",
            "020 83",
            "020 836",
            "020 8366",
            "020 8366 1",
            "020 8366 11",
            "020 8366 117",
            "020 8366 1177",
        ],
    );
}

#[test]
fn gb_mobile_number_without_trunk_prefix() {
    assert_formats_as(
        RegionCode::gb(),
        "7400123456",
        &[
            "7",
            "74",
            "740",
            "7400",
            "7400 1",
            "7400 12",
            "7400 123",
            "7400 1234",
            "7400 12345",
            "7400 123456",
        ],
    );
}

#[test]
fn de_number_with_variable_length_subscriber_part() {
    assert_formats_as(
        RegionCode::de(),
        "03012345678",
        &[
            "0",
            "03",
            "030",
            "030 1",
            "030 12",
            "030 123",
            "030 1234",
            "030 12345",
            "030 123456",
            "030 1234567",
            "030 12345678",
        ],
    );
}

#[test]
fn hk_number_dialed_with_plus_sign() {
    assert_formats_as(
        RegionCode::us(),
        "+85291234567",
        &[
            "+",
            "+8",
            "+85",
            "+852 ",
            "+852 9",
            "+852 91",
            "+852 912",
            "+852 9123",
            "+852 9123 4",
            "+852 9123 45",
            "+852 9123 456",
            "+852 9123 4567",
        ],
    );
}

#[test]
fn il_mobile_number_with_trunk_prefix() {
    assert_formats_as(
        RegionCode::il(),
        "0501234567",
        &[
            "0",
            "05",
            "050",
            "050-1",
            "050-12",
            "050-123",
            "050-123-4",
            "050-123-45",
            "050-123-456",
            "050-123-4567",
        ],
    );
}

#[test]
fn il_short_code_uses_its_own_grouping() {
    assert_formats_as(
        RegionCode::il(),
        "1255123",
        &["1", "12", "125", "1255", "1255-1", "1255-12", "1255-123"],
    );
}

#[test]
fn unknown_region_passes_national_input_through() {
    assert_formats_as(RegionCode::zz(), "1234", &["1", "12", "123", "1234"]);
}

#[test]
fn unknown_region_still_formats_international_input() {
    assert_formats_as(
        RegionCode::zz(),
        "+442083661177",
        &[
            "+",
            "+4",
            "+44 ",
            "+44 2",
            "+44 20",
            "+44 20 8",
            "+44 20 83",
            "+44 20 836",
            "+44 20 8366",
            "+44 20 8366 1",
            "+44 20 8366 11",
            "+44 20 8366 117",
            "+44 20 8366 1177",
        ],
    );
}

#[test]
fn unrecognized_country_calling_code_gives_up_at_six_characters() {
    assert_formats_as(
        RegionCode::us(),
        "+999999",
        &["+", "+9", "+99", "+999", "+9999", "+99999", "+999999"],
    );
}

#[test]
fn formatting_stops_at_the_first_separator_character() {
    assert_formats_as(
        RegionCode::us(),
        "650-2532",
        &[
            "6", "65", "(650", "650-", "650-2", "650-25", "650-253", "650-2532",
        ],
    );
}

#[test]
fn overflowing_every_format_falls_back_to_raw_digits() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    for digit in "6502532222".chars() {
        formatter.insert_character(digit, false);
    }
    // The eleventh digit no longer fits any US format.
    assert_eq!(formatter.insert_character('2', false), "65025322222");
    // Formatting stays off for the rest of the session.
    assert_eq!(formatter.insert_character('2', false), "650253222222");
}

#[test]
fn full_width_digits_are_echoed_until_formatting_starts() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    assert_eq!(formatter.insert_character('\u{FF16}', false), "\u{FF16}");
    assert_eq!(
        formatter.insert_character('\u{FF15}', false),
        "\u{FF16}\u{FF15}"
    );
    // From the third character on, output is rebuilt from normalized digits.
    assert_eq!(formatter.insert_character('\u{FF10}', false), "(650");
    assert_eq!(formatter.insert_character('2', false), "(650) 2");
}

#[test]
fn full_width_plus_sign_starts_an_international_number() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    assert_eq!(formatter.insert_character('\u{FF0B}', false), "\u{FF0B}");
    assert_eq!(formatter.insert_character('4', false), "\u{FF0B}4");
    assert_eq!(formatter.insert_character('4', false), "+44 ");
}

#[test]
fn remembered_position_follows_inserted_formatting() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    formatter.insert_character('6', false);
    formatter.insert_character('5', false);
    formatter.insert_character('0', true);
    // Output "(650": the remembered '0' sits one past index 3.
    assert_eq!(formatter.remembered_position(), 4);
    for digit in "2532222".chars() {
        formatter.insert_character(digit, false);
    }
    // Output "(650) 253-2222": the '0' has not moved.
    assert_eq!(formatter.remembered_position(), 4);
}

#[test]
fn remembered_position_moves_with_reformatting() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    for digit in "650253".chars() {
        formatter.insert_character(digit, false);
    }
    formatter.insert_character('2', true);
    // Output "650-2532": the remembered seventh digit is at position 8.
    assert_eq!(formatter.remembered_position(), 8);
    formatter.insert_character('2', false);
    // Output "(650) 253-22": the digit moved to position 11.
    assert_eq!(formatter.remembered_position(), 11);
    for digit in "22".chars() {
        formatter.insert_character(digit, false);
    }
    // Output "(650) 253-2222".
    assert_eq!(formatter.remembered_position(), 11);
}

#[test]
fn remembered_position_survives_unformattable_input() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    formatter.insert_character('6', false);
    formatter.insert_character('5', true);
    formatter.insert_character('0', false);
    formatter.insert_character('-', false);
    // Once formatting is off, the position is the one in the raw input.
    assert_eq!(formatter.remembered_position(), 2);
}

#[test]
fn reset_rebinds_the_default_region() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    // Drive the session onto GB metadata through a country calling code.
    for character in "+442083661177".chars() {
        formatter.insert_character(character, false);
    }
    formatter.reset();
    // A fresh national number formats with US rules again.
    let mut output = String::new();
    for digit in "6502532222".chars() {
        output = formatter.insert_character(digit, false).to_string();
    }
    assert_eq!(output, "(650) 253-2222");
    assert_eq!(formatter.region_code(), RegionCode::us());
}

#[test]
fn reset_clears_passthrough() {
    init_logging();
    let mut formatter = AsYouTypeFormatter::new(RegionCode::us());
    formatter.insert_character('a', false);
    assert_eq!(formatter.insert_character('6', false), "a6");
    formatter.reset();
    assert_eq!(formatter.insert_character('6', false), "6");
}
