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

mod region_data;

use std::{
    collections::{HashMap, VecDeque},
    sync::LazyLock,
};

use log::debug;

use crate::i18n;

/// The maximum length of a country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// One declarative formatting rule for a national number.
///
/// `pattern` groups the digits of the national number with capture groups and
/// `format` rebuilds them with `$n` references and separator punctuation.
/// `leading_digits_pattern` holds one prefilter fragment per input length,
/// starting at the minimum leading-digits threshold; a rule with no fragment
/// for a given length is as specific as it will ever get.
#[derive(Debug)]
pub struct FormatRule {
    pub pattern: &'static str,
    pub format: &'static str,
    pub leading_digits_pattern: &'static [&'static str],
    /// How to render the national prefix together with the first group when a
    /// number is formatted in national format. Carried with the rule; the
    /// as-you-type engine itself emits the prefix text verbatim instead.
    pub national_prefix_formatting_rule: Option<&'static str>,
}

/// Everything the formatter needs to know about one region. Immutable,
/// compiled into the binary.
#[derive(Debug)]
pub struct RegionMetadata {
    pub id: &'static str,
    /// 0 when unset (the empty-metadata sentinel).
    pub country_code: i32,
    /// Marks the main region among several sharing a calling code, e.g. US
    /// for NANPA.
    pub main_country_for_code: bool,
    /// Pattern for the locally dialed international call prefix, or the
    /// literal "NA" when the region has none we know of.
    pub international_prefix: &'static str,
    pub national_prefix: Option<&'static str>,
    pub national_prefix_for_parsing: Option<&'static str>,
    pub number_format: &'static [FormatRule],
    pub intl_number_format: &'static [FormatRule],
}

/// Fallback metadata for unknown region codes. A session bound to it can
/// still format "+"-prefixed international input once a country calling code
/// resolves to a known region.
pub static EMPTY_METADATA: RegionMetadata = RegionMetadata {
    id: "",
    country_code: 0,
    main_country_for_code: false,
    international_prefix: "NA",
    national_prefix: None,
    national_prefix_for_parsing: None,
    number_format: &[],
    intl_number_format: &[],
};

/// Read-only lookup over the compiled-in region tables.
pub struct MetadataStore {
    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<&'static str, &'static RegionMetadata>,
    /// A mapping from a country calling code to the region codes it serves,
    /// main country first. Kept as a sorted vector so lookups are a binary
    /// search.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<&'static str>)>,
}

/// Process-wide store over the compiled-in metadata. Formatter sessions
/// constructed with [`crate::AsYouTypeFormatter::new`] share this instance.
pub static METADATA_STORE: LazyLock<MetadataStore> = LazyLock::new(MetadataStore::new);

impl MetadataStore {
    pub(crate) fn new() -> Self {
        Self::from_regions(region_data::REGION_METADATA)
    }

    fn from_regions(regions: &'static [RegionMetadata]) -> Self {
        let mut region_to_metadata_map = HashMap::new();
        let mut regions_by_code = HashMap::<i32, VecDeque<&'static str>>::new();
        for metadata in regions {
            if metadata.id == i18n::RegionCode::get_unknown() {
                continue;
            }
            region_to_metadata_map.insert(metadata.id, metadata);
            let regions_for_code = regions_by_code.entry(metadata.country_code).or_default();
            if metadata.main_country_for_code {
                regions_for_code.push_front(metadata.id);
            } else {
                regions_for_code.push_back(metadata.id);
            }
        }
        let mut country_calling_code_to_region_code_map: Vec<_> = regions_by_code
            .into_iter()
            .map(|(code, regions)| (code, Vec::from(regions)))
            .collect();
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);
        debug!(
            "loaded formatting metadata for {} regions",
            region_to_metadata_map.len()
        );
        Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
        }
    }

    /// Total lookup: unknown region codes resolve to the empty sentinel, so
    /// callers never have to handle a missing region.
    pub fn lookup_region_metadata(&self, region_code: &str) -> &'static RegionMetadata {
        self.region_to_metadata_map
            .get(region_code)
            .copied()
            .unwrap_or(&EMPTY_METADATA)
    }

    pub fn has_country_calling_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    /// Returns the region code that matches the specific country calling
    /// code, preferring the main country when several regions share it. In
    /// the case of no region code being found, the unknown region code is
    /// returned.
    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> &'static str {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .and_then(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .first()
                    .copied()
            })
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    /// Tries to strip a country calling code off the front of `number`.
    ///
    /// Returns `(code, remainder)` on success and `(0, number)` when no known
    /// code is found; the remainder is meaningless in that case. Country
    /// calling codes never begin with a zero.
    pub fn extract_country_calling_code<'a>(&self, number: &'a str) -> (i32, &'a str) {
        if number.is_empty() || number.starts_with('0') {
            return (0, number);
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(number.len()) {
            let Ok(code) = number[..length].parse::<i32>() else {
                continue;
            };
            if self.has_country_calling_code(code) {
                return (code, &number[length..]);
            }
        }
        (0, number)
    }
}
