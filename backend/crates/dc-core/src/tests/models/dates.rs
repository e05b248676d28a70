use crate::{CoreError, parse_date};

use chrono::NaiveDate;

#[test]
fn given_full_date_when_parsed_then_returns_that_day() {
    let date = parse_date("from", "2020-06-15").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2020, 6, 15).unwrap());
}

#[test]
fn given_bare_year_when_parsed_then_returns_first_of_january() {
    let date = parse_date("from", "2020").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
}

#[test]
fn given_year_and_month_when_parsed_then_returns_first_of_month() {
    let date = parse_date("to", " 2021-09 ").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2021, 9, 1).unwrap());
}

#[test]
fn given_blank_input_when_parsed_then_validation_error_names_field() {
    let result = parse_date("from", "   ");
    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "from"
    ));
}

#[test]
fn given_garbage_when_parsed_then_validation_error() {
    assert!(matches!(
        parse_date("to", "last tuesday"),
        Err(CoreError::Validation { .. })
    ));
    assert!(matches!(
        parse_date("to", "2020-13-01"),
        Err(CoreError::Validation { .. })
    ));
}

#[test]
fn given_signed_year_when_parsed_then_validation_error() {
    for input in ["+202", "-202", "+202-01", "-202-01-01"] {
        assert!(
            matches!(parse_date("from", input), Err(CoreError::Validation { .. })),
            "{input} should be rejected"
        );
    }
}
