//! String convenience helpers
//!
//! [`StrExt`] adds blank detection, character-safe truncation and UUID
//! parsing to `str`; [`OptionStrExt`] adds the empty/blank checks to
//! `Option`-wrapped strings, where optional request fields usually live.
//!
//! ```rust
//! use omnitool_str::{OptionStrExt, StrExt};
//!
//! let display_name: Option<&str> = Some("  ");
//! assert!(display_name.is_none_or_blank());
//!
//! assert_eq!("résumé".truncate_to(4), "résu");
//! ```

use uuid::Uuid;

/// Extension helpers for `str`
pub trait StrExt {
    /// Returns true if the string is empty or whitespace-only
    fn is_blank(&self) -> bool;

    /// Returns a prefix of at most `max` characters
    ///
    /// Counts characters, not bytes, so the cut never lands inside a UTF-8
    /// code point. A string already within the limit is returned whole.
    fn truncate_to(&self, max: usize) -> &str;

    /// Parses the string as a UUID
    fn to_uuid(&self) -> Result<Uuid, uuid::Error>;
}

impl StrExt for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn truncate_to(&self, max: usize) -> &str {
        match self.char_indices().nth(max) {
            Some((idx, _)) => &self[..idx],
            None => self,
        }
    }

    fn to_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(self)
    }
}

/// Empty/blank checks for `Option`-wrapped strings
///
/// The four checks come in complementary pairs so call sites read
/// positively either way, mirroring how optional string fields are usually
/// validated.
pub trait OptionStrExt {
    /// Returns true if the option is `None` or holds an empty string
    fn is_none_or_empty(&self) -> bool;

    /// Returns true if the option holds a non-empty string
    fn is_some_and_not_empty(&self) -> bool;

    /// Returns true if the option is `None` or holds a whitespace-only
    /// string
    fn is_none_or_blank(&self) -> bool;

    /// Returns true if the option holds a string with visible content
    fn is_some_and_not_blank(&self) -> bool;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn is_none_or_empty(&self) -> bool {
        match self {
            Some(s) => s.as_ref().is_empty(),
            None => true,
        }
    }

    fn is_some_and_not_empty(&self) -> bool {
        !self.is_none_or_empty()
    }

    fn is_none_or_blank(&self) -> bool {
        match self {
            Some(s) => s.as_ref().is_blank(),
            None => true,
        }
    }

    fn is_some_and_not_blank(&self) -> bool {
        !self.is_none_or_blank()
    }
}
