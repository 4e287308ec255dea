//! Postal address parsing.
//!
//! Addresses arrive as free text with one field group per line:
//!
//! ```text
//! 1600 Amphitheatre Pkwy        <- street
//! Mountain View, CA 94043       <- City[, State] PostalCode
//! United States                 <- country
//! ```
//!
//! Validation happens in two stages. An address needs three usable lines,
//! then its second line must fit the city-line grammar. Either failure
//! drops the whole address; nothing is emitted partially.

use crate::domain::AddressKind;
use crate::error::{AddressError, AddressResult};
use crate::models::PostalAddress;
use regex::Regex;

/// City, an optional `, State` token, then a final space-free postal code.
const CITY_LINE_PATTERN: &str = r"^([^,]+)(, [^ ]+)? ([^ ]+)$";

/// An address that passed both validation stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    /// Empty when the city line has no state token.
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Parses postal addresses. Holds its compiled city-line pattern.
#[derive(Debug, Clone)]
pub struct AddressParser {
    city_line: Regex,
}

impl AddressParser {
    pub fn new() -> Self {
        Self {
            city_line: Regex::new(CITY_LINE_PATTERN).expect("Failed to compile city-line pattern"),
        }
    }

    /// Parse one postal address.
    ///
    /// # Errors
    ///
    /// - `AddressError::Incomplete` when the trimmed text has fewer than three
    ///   lines or one of the first three is blank.
    /// - `AddressError::UnreadableCityLine` when line two is not
    ///   `City[, State] PostalCode`.
    pub fn parse(&self, address: &PostalAddress) -> AddressResult<ParsedAddress> {
        let raw = address.raw_text.trim();
        let lines: Vec<&str> = raw.lines().collect();

        if lines.len() < 3 || lines[..3].iter().any(|line| line.trim().is_empty()) {
            return Err(AddressError::Incomplete {
                raw: raw.to_string(),
            });
        }

        let (street, city_line, country) = (lines[0], lines[1], lines[2]);

        let caps = self
            .city_line
            .captures(city_line)
            .ok_or_else(|| AddressError::UnreadableCityLine {
                line: city_line.to_string(),
            })?;

        let state = caps
            .get(2)
            .map(|m| m.as_str().trim_start_matches(", ").to_string())
            .unwrap_or_default();

        Ok(ParsedAddress {
            kind: address.kind,
            street: street.to_string(),
            city: caps[1].to_string(),
            state,
            postal_code: caps[3].to_string(),
            country: country.to_string(),
        })
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> AddressResult<ParsedAddress> {
        AddressParser::new().parse(&PostalAddress::new(AddressKind::Work, raw))
    }

    #[test]
    fn test_city_state_postcode() {
        let parsed = parse("1600 Amphitheatre Pkwy\nMountain View, CA 94043\nUnited States").unwrap();
        assert_eq!(
            parsed,
            ParsedAddress {
                kind: AddressKind::Work,
                street: "1600 Amphitheatre Pkwy".to_string(),
                city: "Mountain View".to_string(),
                state: "CA".to_string(),
                postal_code: "94043".to_string(),
                country: "United States".to_string(),
            }
        );
    }

    #[test]
    fn test_city_without_state() {
        let parsed = parse("Unter den Linden 1\nBerlin 10117\nGermany").unwrap();
        assert_eq!(parsed.city, "Berlin");
        assert_eq!(parsed.state, "");
        assert_eq!(parsed.postal_code, "10117");
    }

    #[test]
    fn test_multi_word_city_without_state() {
        let parsed = parse("1 Main St\nSalt Lake City 84101\nUSA").unwrap();
        assert_eq!(parsed.city, "Salt Lake City");
        assert_eq!(parsed.postal_code, "84101");
    }

    #[test]
    fn test_extra_lines_ignored() {
        let parsed = parse("Street 1\nTown, ST 12345\nCountry\nc/o Someone").unwrap();
        assert_eq!(parsed.country, "Country");
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let parsed = parse("\n  Street 1\nTown 12345\nCountry  \n").unwrap();
        assert_eq!(parsed.street, "Street 1");
        assert_eq!(parsed.country, "Country");
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse("Street 1\r\nTown, ST 12345\r\nCountry").unwrap();
        assert_eq!(parsed.postal_code, "12345");
        assert_eq!(parsed.country, "Country");
    }

    #[test]
    fn test_two_lines_incomplete() {
        assert_eq!(
            parse("Street 1\nTown 12345"),
            Err(AddressError::Incomplete {
                raw: "Street 1\nTown 12345".to_string()
            })
        );
    }

    #[test]
    fn test_blank_middle_line_incomplete() {
        assert!(matches!(
            parse("Street 1\n   \nCountry"),
            Err(AddressError::Incomplete { .. })
        ));
    }

    #[test]
    fn test_postcode_with_space_is_unreadable() {
        assert_eq!(
            parse("221B Baker Street\nLondon, UK NW1 6XE\nUnited Kingdom"),
            Err(AddressError::UnreadableCityLine {
                line: "London, UK NW1 6XE".to_string()
            })
        );
    }

    #[test]
    fn test_multi_word_state_is_unreadable() {
        assert!(matches!(
            parse("1 Rue\nMontreal, New Brunswick E1A\nCanada"),
            Err(AddressError::UnreadableCityLine { .. })
        ));
    }

    #[test]
    fn test_city_only_is_unreadable() {
        assert!(matches!(
            parse("Street 1\nSpringfield\nUSA"),
            Err(AddressError::UnreadableCityLine { .. })
        ));
    }
}
