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

use regex::{Match, Regex};

pub trait RegexFullMatch {
    /// Whether the regex matches the whole of `s`.
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexMatchStart {
    /// Leftmost match, but only if it begins at the first byte of `s`.
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;

    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find(s)
            .is_some_and(|matched| matched.start() == 0 && matched.end() == s.len())
    }
}

impl RegexMatchStart for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        self.find(s).filter(|matched| matched.start() == 0)
    }
}
