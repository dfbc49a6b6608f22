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

//! An incremental ("as-you-type") phone number formatter.
//!
//! A formatter session is bound to one region at construction and fed one
//! character at a time; after every character it returns the best-effort
//! formatted rendering of everything entered so far, driven by the
//! region's declarative formatting rules.
//!
//! ```
//! use rasyoutype::AsYouTypeFormatter;
//!
//! let mut formatter = AsYouTypeFormatter::new("US");
//! assert_eq!(formatter.insert_character('6', false), "6");
//! assert_eq!(formatter.insert_character('5', false), "65");
//! assert_eq!(formatter.insert_character('0', false), "(650");
//! assert_eq!(formatter.insert_character('2', false), "(650) 2");
//! ```

mod asyoutype;
mod metadata;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use asyoutype::AsYouTypeFormatter;
pub use metadata::{FormatRule, MetadataStore, RegionMetadata, METADATA_STORE};
