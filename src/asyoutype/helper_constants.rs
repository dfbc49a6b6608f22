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

/// The minimum count of national digits accrued before formatting is
/// attempted. The first leading-digits fragment of every rule matches up to
/// this many digits.
pub const MIN_LEADING_DIGITS_LENGTH: usize = 3;

pub const PLUS_SIGN: char = '+';
pub const FULLWIDTH_PLUS_SIGN: char = '\u{FF0B}';

/// Marks a digit slot that has not been entered yet (the punctuation space).
pub const DIGIT_PLACEHOLDER: char = '\u{2008}';

/// A synthetic number long enough to satisfy any realistic grouping pattern.
/// The ITU caps national numbers at 15 digits.
pub const LONGEST_PHONE_NUMBER: &str = "999999999999999";

pub const NANPA_COUNTRY_CODE: i32 = 1;

// Punctuation acceptable inside a formatted phone number: dashes, white
// space, full stops, slashes, brackets, parentheses and tildes, with their
// full-width variants, plus the letter 'x' used as a carrier-code
// placeholder. Written for embedding in a regex character class, hence the
// escaped square brackets.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";
