//! Record formatting tests driven from contacts as the service delivers them.

use contacts_to_bbdb::bbdb::{AddressParser, NameParser, RecordFormatter};
use contacts_to_bbdb::error::AddressError;
use contacts_to_bbdb::models::{ContactRecord, PostalAddress};
use contacts_to_bbdb::domain::AddressKind;

fn from_json(json: &str) -> ContactRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_full_contact_line() {
    let contact = from_json(
        r#"{
        "id": "c_beethoven",
        "display_name": "Ludwig van Beethoven",
        "nickname": "Louis",
        "organization": "Vienna Philharmonic",
        "emails": [{"address": "ludwig@example.com"}, {"address": "lvb@example.org"}],
        "postal_addresses": [
            {"rel": "http://schemas.google.com/g/2005#work",
             "formatted": "Schwarzspanierstrasse 15\nWien, W 1090\nAustria"},
            {"rel": "home", "formatted": "Bonngasse 20\nBonn"}
        ],
        "phone_numbers": [{"rel": "mobile", "number": "+43 1 234"}],
        "notes": "Composer\nPrefers \"Louis\""
    }"#,
    );

    let outcome = RecordFormatter::new().format(&contact);

    assert_eq!(
        outcome.record.as_str(),
        concat!(
            r#"["Ludwig" "van Beethoven" "Louis" "Vienna Philharmonic" "#,
            r#"( ["Mobile" "+43 1 234"] ) "#,
            r#"( ["Work" ("Schwarzspanierstrasse 15") "Wien" "W" "1090" "Austria"] ) "#,
            r#"( "ludwig@example.com" "lvb@example.org" ) "#,
            r#"( (notes . "Composer Prefers \"Louis\"") ) nil]"#,
        )
    );

    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].contact, "Ludwig van Beethoven");
    assert!(matches!(
        outcome.diagnostics[0].error,
        AddressError::Incomplete { .. }
    ));
}

#[test]
fn test_empty_contact_line() {
    let contact = from_json("{}");
    let line = RecordFormatter::new().format_line(&contact);
    assert_eq!(line.as_str(), "[nil nil nil nil nil nil nil (  ) nil]");
}

#[test]
fn test_placeholders_degrade_independently() {
    let contact = from_json(r#"{"display_name": "Madonna", "emails": [{"address": "m@example.com"}]}"#);
    let line = RecordFormatter::new().format_line(&contact);
    assert_eq!(
        line.as_str(),
        r#"["Madonna" nil nil nil nil nil ( "m@example.com" ) (  ) nil]"#
    );
}

#[test]
fn test_name_splitting() {
    let names = NameParser::new();

    let plain = names.parse(Some("Ada Lovelace"), None);
    assert_eq!(plain.first_name.as_deref(), Some("Ada"));
    assert_eq!(plain.last_name.as_deref(), Some("Lovelace"));

    for (display, last) in [
        ("Ludwig van Beethoven", "van Beethoven"),
        ("Manfred von Richthofen", "von Richthofen"),
        ("Charles de Gaulle", "de Gaulle"),
    ] {
        let parsed = names.parse(Some(display), None);
        assert_eq!(parsed.last_name.as_deref(), Some(last), "{}", display);
    }

    let single = names.parse(Some("Madonna"), None);
    assert_eq!(single.first_name.as_deref(), Some("Madonna"));
    assert!(single.last_name.is_none());
}

#[test]
fn test_postcode_with_space_is_rejected() {
    let address = PostalAddress::new(
        AddressKind::Home,
        "221B Baker Street\nLondon, UK NW1 6XE\nUnited Kingdom",
    );
    let result = AddressParser::new().parse(&address);
    assert!(matches!(
        result,
        Err(AddressError::UnreadableCityLine { ref line }) if line == "London, UK NW1 6XE"
    ));
}

#[test]
fn test_two_line_address_dropped_record_kept() {
    let contact = from_json(
        r#"{
        "display_name": "Alan Turing",
        "organization": "Bletchley Park",
        "postal_addresses": [{"rel": "work", "formatted": "Sherwood Drive\nBletchley MK3 6EB"}]
    }"#,
    );

    let outcome = RecordFormatter::new().format(&contact);
    assert_eq!(
        outcome.record.as_str(),
        r#"["Alan" "Turing" nil "Bletchley Park" nil nil nil (  ) nil]"#
    );
    assert_eq!(outcome.diagnostics.len(), 1);
}

#[test]
fn test_formatting_is_deterministic() {
    let contact = from_json(
        r#"{
        "display_name": "Grace Hopper",
        "phone_numbers": [{"rel": "work", "number": "555-0100"}],
        "notes": "Admiral\n\nCOBOL"
    }"#,
    );

    let formatter = RecordFormatter::new();
    let first = formatter.format_line(&contact);
    let second = RecordFormatter::new().format_line(&contact);
    assert_eq!(first, second);
    assert_eq!(first, formatter.format_line(&contact));
}
