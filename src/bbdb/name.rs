//! Display-name splitting.
//!
//! A display name is split into a head (first name) and a tail (last name).
//! The tail is the final space-free token, optionally preceded by one of
//! the surname particles `von`, `van` or `de`.

use regex::Regex;

/// Everything before the tail is the first name; the tail may carry a particle.
const NAME_PATTERN: &str = r"^(.+?) ((?:von |van |de )?[^ ]+)$";

/// A display name split into its BBDB slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
}

/// Splits display names. Holds its compiled pattern for reuse across records.
#[derive(Debug, Clone)]
pub struct NameParser {
    pattern: Regex,
}

impl NameParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(NAME_PATTERN).expect("Failed to compile name pattern"),
        }
    }

    /// Split a display name and attach the nickname.
    ///
    /// Empty strings count as absent. A name that does not split (a single
    /// token) becomes the first name with no last name. Whitespace is kept
    /// as-is.
    pub fn parse(&self, display_name: Option<&str>, nickname: Option<&str>) -> ParsedName {
        let nickname = non_empty(nickname).map(str::to_string);

        let Some(display_name) = non_empty(display_name) else {
            return ParsedName {
                nickname,
                ..Default::default()
            };
        };

        match self.pattern.captures(display_name) {
            Some(caps) => ParsedName {
                first_name: Some(caps[1].to_string()),
                last_name: Some(caps[2].to_string()),
                nickname,
            },
            None => ParsedName {
                first_name: Some(display_name.to_string()),
                last_name: None,
                nickname,
            },
        }
    }
}

impl Default for NameParser {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
