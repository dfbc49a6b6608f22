// Copyright (C) 2009 The Libphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{debug, warn};

use crate::metadata::{FormatRule, MetadataStore, RegionMetadata, METADATA_STORE};
use crate::regex_util::{RegexFullMatch, RegexMatchStart};

use super::helper_constants::{
    DIGIT_PLACEHOLDER, FULLWIDTH_PLUS_SIGN, MIN_LEADING_DIGITS_LENGTH, NANPA_COUNTRY_CODE,
    PLUS_SIGN,
};
use super::regexps::reg_exps;
use super::template::{build_formatting_template, placeholder_count};

/// Where a session stands in the recognition of the number's shape.
///
/// The phase only ever moves forward. `Passthrough` is terminal until the
/// session is reset: once a character we cannot format arrives, or the input
/// outgrows every candidate rule, the session echoes raw input from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Fewer than three characters accrued; too early to decide anything.
    Accruing,
    /// An IDD or plus sign was seen; digits are accruing towards a country
    /// calling code.
    AwaitingCountryCode,
    /// The national number is being matched against formatting rules.
    Formatting,
    /// Formatting has been abandoned; raw input is echoed back.
    Passthrough,
}

/// A formatter which formats phone numbers as they are entered.
///
/// A session is bound to one region at construction. Digits are added with
/// [`insert_character`](Self::insert_character), which returns the partially
/// formatted number after every character; [`reset`](Self::reset) prepares
/// the session for a new number.
///
/// The formatter is based on the declarative formatting rules carried in the
/// region metadata. It never judges validity: an input it cannot lay out is
/// returned exactly as typed.
pub struct AsYouTypeFormatter {
    store: &'static MetadataStore,
    default_region: String,
    default_metadata: &'static RegionMetadata,
    current_metadata: &'static RegionMetadata,

    phase: Phase,
    /// Set once the input is recognized as carrying an IDD, a plus sign or a
    /// national prefix; selects the international rule list where the region
    /// has one.
    international_mode: bool,

    /// What the last call returned. Kept for cursor arithmetic.
    current_output: String,
    /// Every character ever entered, unmodified.
    accrued_input: String,
    /// Normalized digits and plus signs only.
    accrued_input_without_formatting: String,
    /// The digits still subject to grouping, after any prefix was split off.
    national_number: String,
    /// IDD, country code or national prefix text already decided, emitted
    /// verbatim in front of the formatted national number.
    prefix_before_national_number: String,

    formatting_template: String,
    /// Source text of the grouping pattern the template was built from.
    current_formatting_pattern: String,
    /// Char position of the template slot filled most recently.
    last_match_position: usize,
    possible_formats: Vec<&'static FormatRule>,

    /// The remembered char position in `accrued_input_without_formatting`.
    position_to_remember: usize,
    /// The remembered char position in `accrued_input`.
    original_position: usize,
}

impl AsYouTypeFormatter {
    /// Creates a formatter for the given ISO 3166-1 two-letter region code,
    /// backed by the process-wide metadata store.
    ///
    /// An unknown region code still yields a working formatter, though it can
    /// only format numbers entered with a leading plus sign.
    pub fn new(region_code: &str) -> Self {
        Self::with_store(&METADATA_STORE, region_code)
    }

    /// Creates a formatter over an explicit metadata store.
    pub fn with_store(store: &'static MetadataStore, region_code: &str) -> Self {
        let default_region = region_code.to_ascii_uppercase();
        let default_metadata = store.lookup_region_metadata(&default_region);
        Self {
            store,
            default_region,
            default_metadata,
            current_metadata: default_metadata,
            phase: Phase::Accruing,
            international_mode: false,
            current_output: String::new(),
            accrued_input: String::new(),
            accrued_input_without_formatting: String::new(),
            national_number: String::new(),
            prefix_before_national_number: String::new(),
            formatting_template: String::new(),
            current_formatting_pattern: String::new(),
            last_match_position: 0,
            possible_formats: Vec::new(),
            position_to_remember: 0,
            original_position: 0,
        }
    }

    /// Clears the session state so the formatter can take a new number.
    /// The metadata is re-bound to the construction-time region if a country
    /// calling code had switched it away.
    pub fn reset(&mut self) {
        self.phase = Phase::Accruing;
        self.international_mode = false;
        self.current_output.clear();
        self.accrued_input.clear();
        self.accrued_input_without_formatting.clear();
        self.national_number.clear();
        self.prefix_before_national_number.clear();
        self.formatting_template.clear();
        self.current_formatting_pattern.clear();
        self.last_match_position = 0;
        self.possible_formats.clear();
        self.position_to_remember = 0;
        self.original_position = 0;
        if !std::ptr::eq(self.current_metadata, self.default_metadata) {
            self.current_metadata = self.store.lookup_region_metadata(&self.default_region);
        }
    }

    /// Formats a phone number on-the-fly as each character is entered,
    /// returning the partially formatted number.
    ///
    /// Digits may arrive in any Unicode decimal form; a plus sign may arrive
    /// full-width. Any other character stops as-you-type formatting for the
    /// rest of the session, and input is returned as entered from then on.
    ///
    /// If `remember_position` is set, the position of `next_char` is tracked
    /// and can be retrieved later with
    /// [`remembered_position`](Self::remembered_position), adjusted for the
    /// formatting characters inserted or removed in front of it.
    pub fn insert_character(&mut self, next_char: char, remember_position: bool) -> &str {
        self.accrued_input.push(next_char);
        if remember_position {
            self.original_position = self.accrued_input.chars().count();
        }
        let normalized = if self.phase == Phase::Passthrough {
            None
        } else {
            normalize_char(next_char)
        };
        let Some(next_char) = normalized else {
            self.phase = Phase::Passthrough;
            self.current_output = self.accrued_input.clone();
            return &self.current_output;
        };
        if next_char == PLUS_SIGN {
            self.accrued_input_without_formatting.push(next_char);
        } else {
            self.accrued_input_without_formatting.push(next_char);
            self.national_number.push(next_char);
        }
        if remember_position {
            self.position_to_remember = self.accrued_input_without_formatting.chars().count();
        }
        self.current_output = self.format_accrued_input(next_char);
        &self.current_output
    }

    /// Returns the current position, in the partially formatted number, of
    /// the character that was entered with `remember_position` set.
    pub fn remembered_position(&self) -> usize {
        if self.phase == Phase::Passthrough {
            return self.original_position;
        }
        let without_formatting: Vec<char> = self.accrued_input_without_formatting.chars().collect();
        let output: Vec<char> = self.current_output.chars().collect();
        let mut accrued_input_index = 0;
        let mut current_output_index = 0;
        while accrued_input_index < self.position_to_remember
            && current_output_index < output.len()
        {
            if without_formatting[accrued_input_index] == output[current_output_index] {
                accrued_input_index += 1;
            }
            current_output_index += 1;
        }
        current_output_index
    }

    /// The region code the session was constructed for.
    pub fn region_code(&self) -> &str {
        &self.default_region
    }

    fn format_accrued_input(&mut self, next_char: char) -> String {
        // Formatting is attempted only once at least three characters (a
        // plus sign counts) have accrued.
        let len_input = self.accrued_input_without_formatting.chars().count();
        if len_input <= 2 {
            return self.accrued_input.clone();
        }
        if len_input == 3 {
            if self.attempt_to_extract_idd() {
                self.phase = Phase::AwaitingCountryCode;
            } else {
                // No IDD or plus sign was found, must be entering in
                // national format.
                self.phase = Phase::Formatting;
                self.remove_national_prefix_from_national_number();
                return self.attempt_to_choose_formatting_pattern();
            }
        }
        if len_input <= 5 && self.phase == Phase::AwaitingCountryCode {
            if self.attempt_to_extract_country_calling_code() {
                self.phase = Phase::Formatting;
            }
            return fast_cat::concat_str!(
                &self.prefix_before_national_number,
                &self.national_number
            );
        }
        if len_input == 6 && self.phase == Phase::AwaitingCountryCode {
            // The last chance to find a country calling code: the IDD and
            // the code are at most three characters each.
            if !self.attempt_to_extract_country_calling_code() {
                self.phase = Phase::Passthrough;
                return self.accrued_input.clone();
            }
            self.phase = Phase::Formatting;
        }

        if self.possible_formats.is_empty() {
            return self.attempt_to_choose_formatting_pattern();
        }
        // A formatting pattern is bound already. Feed the digit into its
        // template, but prefer an exact re-synthesis whenever the digits
        // accrued so far fully match one of the candidate rules.
        let temp_national_number = self.input_digit_helper(next_char);
        if let Some(formatted_number) = self.attempt_to_format_accrued_digits() {
            return formatted_number;
        }
        let national_number = self.national_number.clone();
        self.narrow_down_possible_formats(&national_number);
        if self.maybe_create_new_template() {
            return self.input_accrued_national_number();
        }
        if self.phase == Phase::Passthrough {
            temp_national_number
        } else {
            fast_cat::concat_str!(&self.prefix_before_national_number, &temp_national_number)
        }
    }

    /// Moves the plus sign or a dialed international prefix over to
    /// `prefix_before_national_number` when the input starts with one.
    fn attempt_to_extract_idd(&mut self) -> bool {
        let pattern = fast_cat::concat_str!(
            r"\+|",
            self.current_metadata.international_prefix
        );
        let international_prefix = match reg_exps().regexp_cache.get_regex(&pattern) {
            Ok(regex) => regex,
            Err(err) => {
                warn!(
                    "invalid international prefix pattern for region {}: {err}",
                    self.current_metadata.id
                );
                return false;
            }
        };
        let Some(end_of_prefix) = international_prefix
            .find_start(&self.accrued_input_without_formatting)
            .map(|matched| matched.end())
        else {
            return false;
        };
        self.international_mode = true;
        self.national_number = self.accrued_input_without_formatting[end_of_prefix..].to_string();
        let prefix = &self.accrued_input_without_formatting[..end_of_prefix];
        self.prefix_before_national_number.push_str(prefix);
        if !self.accrued_input_without_formatting.starts_with(PLUS_SIGN) {
            self.prefix_before_national_number.push(' ');
        }
        true
    }

    /// Moves a country calling code off the front of the national number,
    /// switching the session metadata to the code's main region.
    fn attempt_to_extract_country_calling_code(&mut self) -> bool {
        if self.national_number.is_empty() {
            return false;
        }
        let (country_code, number_without_code) = self
            .store
            .extract_country_calling_code(&self.national_number);
        if country_code == 0 {
            return false;
        }
        self.national_number = number_without_code.to_string();
        let new_region_code = self.store.region_code_for_country_code(country_code);
        if new_region_code != self.default_region {
            debug!("country code {country_code} switches formatting to region {new_region_code}");
            self.current_metadata = self.store.lookup_region_metadata(new_region_code);
        }
        let mut code_buffer = itoa::Buffer::new();
        self.prefix_before_national_number
            .push_str(code_buffer.format(country_code));
        self.prefix_before_national_number.push(' ');
        true
    }

    fn remove_national_prefix_from_national_number(&mut self) {
        let mut start_of_national_number = 0;
        if self.current_metadata.country_code == NANPA_COUNTRY_CODE
            && self.national_number.starts_with('1')
        {
            start_of_national_number = 1;
            self.prefix_before_national_number.push_str("1 ");
            self.international_mode = true;
        } else if let Some(prefix_for_parsing) =
            self.current_metadata.national_prefix_for_parsing
        {
            match reg_exps().regexp_cache.get_regex(prefix_for_parsing) {
                Ok(regex) => {
                    if let Some(matched) = regex.find_start(&self.national_number) {
                        // When a national prefix is present, international
                        // formatting rules apply: the national rules may
                        // carry local layouts for numbers entered without an
                        // area code.
                        self.international_mode = true;
                        start_of_national_number = matched.end();
                    }
                }
                Err(err) => warn!(
                    "invalid national prefix pattern for region {}: {err}",
                    self.current_metadata.id
                ),
            }
            let stripped_prefix = &self.national_number[..start_of_national_number];
            self.prefix_before_national_number.push_str(stripped_prefix);
        }
        self.national_number.drain(..start_of_national_number);
    }

    /// Collects the eligible formatting rules for the national number typed
    /// so far, sets up a template from the first usable one and replays the
    /// accrued digits through it.
    fn attempt_to_choose_formatting_pattern(&mut self) -> String {
        if self.national_number.chars().count() >= MIN_LEADING_DIGITS_LENGTH {
            let leading_digits: String = self
                .national_number
                .chars()
                .take(MIN_LEADING_DIGITS_LENGTH)
                .collect();
            self.gather_available_formats(&leading_digits);
            self.maybe_create_new_template();
            self.input_accrued_national_number()
        } else {
            fast_cat::concat_str!(&self.prefix_before_national_number, &self.national_number)
        }
    }

    fn gather_available_formats(&mut self, leading_digits: &str) {
        let format_list = if self.international_mode
            && !self.current_metadata.intl_number_format.is_empty()
        {
            self.current_metadata.intl_number_format
        } else {
            self.current_metadata.number_format
        };
        for rule in format_list {
            if reg_exps().eligible_format_pattern.full_match(rule.format) {
                self.possible_formats.push(rule);
            }
        }
        self.narrow_down_possible_formats(leading_digits);
    }

    /// Drops every candidate whose leading-digits prefilter for the current
    /// input length rejects the digits typed so far. A rule with no
    /// prefilter left at this length is as specific as it gets and is kept.
    fn narrow_down_possible_formats(&mut self, leading_digits: &str) {
        let index_of_leading_digits_pattern =
            leading_digits.chars().count() - MIN_LEADING_DIGITS_LENGTH;
        self.possible_formats.retain(|rule| {
            let Some(fragment) = rule
                .leading_digits_pattern
                .get(index_of_leading_digits_pattern)
            else {
                return true;
            };
            match reg_exps().regexp_cache.get_regex(fragment) {
                Ok(regex) => regex.matches_start(leading_digits),
                Err(err) => {
                    warn!("invalid leading digits pattern {fragment}: {err}");
                    false
                }
            }
        });
    }

    /// Returns true if a new template was created, as opposed to keeping the
    /// existing one. When several formats are available the first one a
    /// template can be built for wins.
    fn maybe_create_new_template(&mut self) -> bool {
        for index in 0..self.possible_formats.len() {
            let rule = self.possible_formats[index];
            if self.current_formatting_pattern == rule.pattern {
                return false;
            }
            if self.create_formatting_template(rule) {
                debug!("bound formatting pattern {}", rule.pattern);
                self.current_formatting_pattern = rule.pattern.to_string();
                return true;
            }
        }
        self.phase = Phase::Passthrough;
        false
    }

    fn create_formatting_template(&mut self, rule: &FormatRule) -> bool {
        let Some(template) = build_formatting_template(rule.pattern, rule.format) else {
            return false;
        };
        // The template is only usable while it has room for a further digit.
        if placeholder_count(&template) > self.national_number.chars().count() {
            self.formatting_template = template;
            true
        } else {
            false
        }
    }

    /// Tries to lay out the accrued national number as a complete match of
    /// one of the candidate rules.
    fn attempt_to_format_accrued_digits(&mut self) -> Option<String> {
        for rule in &self.possible_formats {
            let regex = match reg_exps().regexp_cache.get_regex(rule.pattern) {
                Ok(regex) => regex,
                Err(err) => {
                    warn!("invalid number format pattern {}: {err}", rule.pattern);
                    continue;
                }
            };
            if regex.full_match(&self.national_number) {
                let formatted_number = regex.replace(&self.national_number, rule.format);
                return Some(fast_cat::concat_str!(
                    &self.prefix_before_national_number,
                    &formatted_number
                ));
            }
        }
        None
    }

    /// Replays every accrued national digit through the current template.
    fn input_accrued_national_number(&mut self) -> String {
        if self.national_number.is_empty() {
            return self.prefix_before_national_number.clone();
        }
        let digits: Vec<char> = self.national_number.chars().collect();
        let mut temp_national_number = String::new();
        for digit in digits {
            temp_national_number = self.input_digit_helper(digit);
        }
        if self.phase == Phase::Passthrough {
            temp_national_number
        } else {
            fast_cat::concat_str!(&self.prefix_before_national_number, &temp_national_number)
        }
    }

    /// Fills the next free template slot with `next_char` and returns the
    /// template prefix up to and including it. When the template has no slot
    /// left, the current rule is unbound so the next call reselects; with no
    /// other candidate to fall back on, formatting is abandoned for good.
    fn input_digit_helper(&mut self, next_char: char) -> String {
        let slot_after_last_match = self
            .formatting_template
            .chars()
            .skip(self.last_match_position)
            .any(|c| c == DIGIT_PLACEHOLDER);
        let first_slot = self
            .formatting_template
            .char_indices()
            .enumerate()
            .find_map(|(char_position, (byte_position, c))| {
                (c == DIGIT_PLACEHOLDER).then_some((char_position, byte_position))
            });
        if let (true, Some((char_position, byte_position))) = (slot_after_last_match, first_slot) {
            let mut digit_buffer = [0u8; 4];
            self.formatting_template.replace_range(
                byte_position..byte_position + DIGIT_PLACEHOLDER.len_utf8(),
                next_char.encode_utf8(&mut digit_buffer),
            );
            self.last_match_position = char_position;
            self.formatting_template
                .chars()
                .take(char_position + 1)
                .collect()
        } else {
            if self.possible_formats.len() == 1 {
                // More digits are entered than the format can handle and
                // there is no other candidate to try.
                self.phase = Phase::Passthrough;
            }
            self.current_formatting_pattern.clear();
            self.accrued_input.clone()
        }
    }
}

/// Maps `next_char` to the ASCII character the engine works with: any
/// Unicode decimal digit to its ASCII value and either plus sign to '+'.
/// Everything else is unformattable.
fn normalize_char(next_char: char) -> Option<char> {
    if next_char == PLUS_SIGN || next_char == FULLWIDTH_PLUS_SIGN {
        return Some(PLUS_SIGN);
    }
    let mut char_buffer = [0u8; 4];
    let normalized = dec_from_char::normalize_decimals(next_char.encode_utf8(&mut char_buffer));
    let mut normalized_chars = normalized.chars();
    match (normalized_chars.next(), normalized_chars.next()) {
        (Some(digit), None) if digit.is_ascii_digit() => Some(digit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_char, AsYouTypeFormatter, Phase};

    #[test]
    fn normalizes_digits_and_plus_signs() {
        assert_eq!(normalize_char('7'), Some('7'));
        assert_eq!(normalize_char('\u{FF16}'), Some('6')); // full-width six
        assert_eq!(normalize_char('\u{0668}'), Some('8')); // arabic-indic eight
        assert_eq!(normalize_char('+'), Some('+'));
        assert_eq!(normalize_char('\u{FF0B}'), Some('+'));
        assert_eq!(normalize_char('-'), None);
        assert_eq!(normalize_char('a'), None);
    }

    #[test]
    fn template_binding_requires_a_spare_slot() {
        let mut formatter = AsYouTypeFormatter::new("US");
        // The seven-digit rule (\d{3})(\d{4}) yields seven placeholder
        // slots; binding it must fail once seven digits have accrued.
        let seven_digit_rule = &crate::METADATA_STORE
            .lookup_region_metadata("US")
            .number_format[1];
        formatter.national_number = "123456".to_string();
        assert!(formatter.create_formatting_template(seven_digit_rule));
        formatter.national_number = "1234567".to_string();
        assert!(!formatter.create_formatting_template(seven_digit_rule));
    }

    #[test]
    fn narrowing_never_grows_a_nonempty_candidate_set() {
        let mut formatter = AsYouTypeFormatter::new("GB");
        let mut previous: Option<usize> = None;
        for digit in "2083661177".chars() {
            formatter.insert_character(digit, false);
            let count = formatter.possible_formats.len();
            if let Some(previous_count) = previous.filter(|&previous_count| previous_count > 0) {
                assert!(count <= previous_count);
            }
            previous = Some(count);
        }
        assert_eq!(formatter.phase, Phase::Formatting);
    }
}
