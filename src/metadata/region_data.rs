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

//! Compiled-in region formatting metadata.
//!
//! The values are derived from libphonenumber's published
//! PhoneNumberMetadata.xml, keeping only the fields the as-you-type engine
//! consumes. Number validation patterns and type descriptions are
//! deliberately absent: this engine never judges whether a number is valid.

use super::{FormatRule, RegionMetadata};

pub(super) static REGION_METADATA: &[RegionMetadata] = &[
    RegionMetadata {
        id: "US",
        country_code: 1,
        main_country_for_code: true,
        international_prefix: "011",
        national_prefix: Some("1"),
        national_prefix_for_parsing: Some("1"),
        number_format: &[
            FormatRule {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                format: "($1) $2-$3",
                leading_digits_pattern: &[],
                national_prefix_formatting_rule: None,
            },
            FormatRule {
                pattern: r"(\d{3})(\d{4})",
                format: "$1-$2",
                leading_digits_pattern: &[],
                national_prefix_formatting_rule: None,
            },
        ],
        intl_number_format: &[FormatRule {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits_pattern: &[],
            national_prefix_formatting_rule: None,
        }],
    },
    RegionMetadata {
        id: "CA",
        country_code: 1,
        main_country_for_code: false,
        international_prefix: "011",
        national_prefix: Some("1"),
        national_prefix_for_parsing: Some("1"),
        number_format: &[
            FormatRule {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                format: "($1) $2-$3",
                leading_digits_pattern: &[],
                national_prefix_formatting_rule: None,
            },
            FormatRule {
                pattern: r"(\d{3})(\d{4})",
                format: "$1-$2",
                leading_digits_pattern: &[],
                national_prefix_formatting_rule: None,
            },
        ],
        intl_number_format: &[FormatRule {
            pattern: r"(\d{3})(\d{3})(\d{4})",
            format: "$1 $2 $3",
            leading_digits_pattern: &[],
            national_prefix_formatting_rule: None,
        }],
    },
    RegionMetadata {
        id: "GB",
        country_code: 44,
        main_country_for_code: true,
        international_prefix: "00",
        national_prefix: Some("0"),
        national_prefix_for_parsing: Some("0"),
        number_format: &[
            FormatRule {
                pattern: r"(\d{2})(\d{4})(\d{4})",
                format: "$1 $2 $3",
                leading_digits_pattern: &["2|5[56]|7[06]", "2|5[56]|7(?:0|6[013-9])"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(\d{3})(\d{3})(\d{4})",
                format: "$1 $2 $3",
                leading_digits_pattern: &[r"1(?:1|\d1)|3|9[018]"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(\d{5})(\d{4,5})",
                format: "$1 $2",
                leading_digits_pattern: &["1(?:38|5[23]|69|76|94)"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(1\d{3})(\d{5,6})",
                format: "$1 $2",
                leading_digits_pattern: &["1"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(7\d{3})(\d{6})",
                format: "$1 $2",
                leading_digits_pattern: &["7(?:[1-57-9]|62)"],
                national_prefix_formatting_rule: Some("0$1"),
            },
        ],
        intl_number_format: &[],
    },
    RegionMetadata {
        id: "DE",
        country_code: 49,
        main_country_for_code: true,
        international_prefix: "00",
        national_prefix: Some("0"),
        national_prefix_for_parsing: Some("0"),
        number_format: &[
            FormatRule {
                pattern: r"(\d{2})(\d{3,11})",
                format: "$1 $2",
                leading_digits_pattern: &["3[02]|40|[68]9"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(\d{3})(\d{3,11})",
                format: "$1 $2",
                leading_digits_pattern: &["2(?:0[1-389]|1[124]|2[18]|3[14])|3(?:[35-9][15]|4[015])|906"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(1\d{2})(\d{7,8})",
                format: "$1 $2",
                leading_digits_pattern: &["1[5-7]"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(800)(\d{7,10})",
                format: "$1 $2",
                leading_digits_pattern: &["800"],
                national_prefix_formatting_rule: Some("0$1"),
            },
        ],
        intl_number_format: &[],
    },
    RegionMetadata {
        id: "HK",
        country_code: 852,
        main_country_for_code: true,
        international_prefix: "00",
        national_prefix: None,
        national_prefix_for_parsing: None,
        number_format: &[
            FormatRule {
                pattern: r"(\d{4})(\d{4})",
                format: "$1 $2",
                leading_digits_pattern: &["[235-7]|[89](?:0[1-9]|[1-9])"],
                national_prefix_formatting_rule: None,
            },
            FormatRule {
                pattern: r"(800)(\d{3})(\d{3})",
                format: "$1 $2 $3",
                leading_digits_pattern: &["800"],
                national_prefix_formatting_rule: None,
            },
            FormatRule {
                pattern: r"(900)(\d{2})(\d{3})(\d{3})",
                format: "$1 $2 $3 $4",
                leading_digits_pattern: &["900"],
                national_prefix_formatting_rule: None,
            },
        ],
        intl_number_format: &[],
    },
    RegionMetadata {
        id: "IL",
        country_code: 972,
        main_country_for_code: true,
        international_prefix: "0(?:0|1[2-48])",
        national_prefix: Some("0"),
        national_prefix_for_parsing: Some("0"),
        number_format: &[
            FormatRule {
                pattern: r"([2-489])(\d{3})(\d{4})",
                format: "$1-$2-$3",
                leading_digits_pattern: &["[2-489]"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"([57]\d)(\d{3})(\d{4})",
                format: "$1-$2-$3",
                leading_digits_pattern: &["[57]"],
                national_prefix_formatting_rule: Some("0$1"),
            },
            FormatRule {
                pattern: r"(1)([7-9]\d{2})(\d{3})(\d{3})",
                format: "$1-$2-$3-$4",
                leading_digits_pattern: &["1[7-9]"],
                national_prefix_formatting_rule: Some("$1"),
            },
            FormatRule {
                pattern: r"(1255)(\d{3})",
                format: "$1-$2",
                leading_digits_pattern: &["125"],
                national_prefix_formatting_rule: Some("$1"),
            },
            FormatRule {
                pattern: r"(1200)(\d{3})(\d{3})",
                format: "$1-$2-$3",
                leading_digits_pattern: &["120"],
                national_prefix_formatting_rule: Some("$1"),
            },
            FormatRule {
                pattern: r"(1212)(\d{2})(\d{2})",
                format: "$1-$2-$3",
                leading_digits_pattern: &["121"],
                national_prefix_formatting_rule: Some("$1"),
            },
            // Star numbers. The substitution introduces a star sign, which
            // keeps this rule out of as-you-type formatting.
            FormatRule {
                pattern: r"(\d{4})",
                format: "*$1",
                leading_digits_pattern: &["[2-689]"],
                national_prefix_formatting_rule: Some("$1"),
            },
        ],
        intl_number_format: &[],
    },
];
