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

use log::warn;

use super::helper_constants::{DIGIT_PLACEHOLDER, LONGEST_PHONE_NUMBER};
use super::regexps::reg_exps;

/// Turns one formatting rule into a placeholder template.
///
/// The rule's grouping pattern is rewritten so that only its geometry
/// remains, matched against a maximal synthetic number, and the rule's
/// substitution applied to that match; every sentinel digit of the result
/// becomes a placeholder. Returns `None` for patterns a fixed-width template
/// cannot represent.
pub(super) fn build_formatting_template(
    grouping_pattern: &str,
    substitution: &str,
) -> Option<String> {
    // Alternation, e.g. (20|3)\d{4}, has no single geometry to build a
    // template from.
    if grouping_pattern.contains('|') {
        return None;
    }
    // Replace anything in the form of [..] with \d, then do the same for
    // standalone digit literals.
    let rewritten = reg_exps()
        .character_class_pattern
        .replace_all(grouping_pattern, r"\d");
    let rewritten = mask_standalone_digits(&rewritten);
    let regex = match reg_exps().regexp_cache.get_regex(&rewritten) {
        Ok(regex) => regex,
        Err(err) => {
            warn!("cannot build a formatting template from {grouping_pattern}: {err}");
            return None;
        }
    };
    let sample_number = regex.find(LONGEST_PHONE_NUMBER)?.as_str();
    let filled = regex.replace(sample_number, substitution);
    Some(
        filled
            .chars()
            .map(|c| if c == '9' { DIGIT_PLACEHOLDER } else { c })
            .collect(),
    )
}

pub(super) fn placeholder_count(template: &str) -> usize {
    template.chars().filter(|&c| c == DIGIT_PLACEHOLDER).count()
}

/// Replaces every digit literal that actually denotes "a digit goes here"
/// with `\d`, preserving the digits of `{m,n}` repetition counts. In
/// `80[0-2]\d{6,10}` the 8 and the 0 are standalone, the lengths are not.
///
/// A digit belongs to a repetition count exactly when one of the next two
/// characters continues or closes the count; two characters of lookahead
/// because a count can be a two-digit number.
fn mask_standalone_digits(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut rewritten = String::with_capacity(pattern.len());
    for (index, &c) in chars.iter().enumerate() {
        let standalone = c.is_ascii_digit()
            && matches!(
                (chars.get(index + 1), chars.get(index + 2)),
                (Some(&first), Some(&second))
                    if first != ',' && first != '}' && second != ',' && second != '}'
            );
        if standalone {
            rewritten.push_str(r"\d");
        } else {
            rewritten.push(c);
        }
    }
    rewritten
}
