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

use std::sync::LazyLock;

use regex::Regex;

use crate::regexp_cache::RegexCache;

use super::helper_constants::VALID_PUNCTUATION;

/// Fixed regular expressions the engine needs, plus the shared cache for the
/// patterns that come out of region metadata at runtime.
pub(super) struct AsYouTypeRegExps {
    /// A character class inside a digit-grouping pattern, e.g. [1-4].
    pub character_class_pattern: Regex,
    /// A substitution template usable for as-you-type formatting: groups of a
    /// dollar sign followed by a single digit, separated by valid phone
    /// number punctuation. This keeps invalid punctuation (such as the star
    /// sign in Israeli star numbers) out of the output.
    pub eligible_format_pattern: Regex,
    pub regexp_cache: RegexCache,
}

impl AsYouTypeRegExps {
    fn new() -> Self {
        let eligible_format =
            format!("[{VALID_PUNCTUATION}]*(\\$\\d[{VALID_PUNCTUATION}]*)+");
        Self {
            character_class_pattern: Regex::new(r"\[([^\[\]])*\]")
                .expect("hard-coded pattern must compile"),
            eligible_format_pattern: Regex::new(&eligible_format)
                .expect("hard-coded pattern must compile"),
            regexp_cache: RegexCache::with_capacity(64),
        }
    }
}

static AS_YOU_TYPE_REG_EXPS: LazyLock<AsYouTypeRegExps> = LazyLock::new(AsYouTypeRegExps::new);

pub(super) fn reg_exps() -> &'static AsYouTypeRegExps {
    &AS_YOU_TYPE_REG_EXPS
}
