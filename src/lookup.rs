//! Key lookup over fetched records.

use crate::config::ValueType;
use crate::error_handling::{Result, SdgetError};
use crate::records::split_record;

/// Returns the values stored under `key`, in record order.
///
/// Keys match case-insensitively. Records without an unescaped `=` never
/// match. When nothing matches, `defaults` are returned as given.
///
/// # Errors
///
/// Under `ValueType::Single`, returns `SdgetError::NoValueFound` when no
/// value remains after applying defaults, and `SdgetError::AmbiguousValue`
/// when more than one does. `ValueType::List` accepts any count.
pub fn lookup_values<S: AsRef<str>>(
    records: &[S],
    key: &str,
    defaults: &[String],
    value_type: ValueType,
) -> Result<Vec<String>> {
    let key = key.to_lowercase();
    let mut values: Vec<String> = records
        .iter()
        .map(|record| split_record(record.as_ref()))
        .filter(|record| record.is_record && record.key == key)
        .map(|record| record.value)
        .collect();
    if values.is_empty() {
        values = defaults.to_vec();
    }

    if value_type == ValueType::Single {
        match values.len() {
            0 => return Err(SdgetError::NoValueFound(key)),
            1 => {}
            count => return Err(SdgetError::AmbiguousValue { key, count }),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TXT_RECORDS: &[&str] = &[
        "foo=bar",
        "empty=",
        "multival=1",
        "multival=2",
        "multival=3",
        "something that's not a key/value pair",
        "notkv",
        "",
        "=",
        "`=",
        "`",
        "spaces and multiple equals signs=are no=problem at=all",
        "\t with tabs\tand spaces \t=  whitespace value\t ",
        "CamelCase=CamelCaseValue",
        "ALLCAPS=ALLCAPS VALUE",
        "` key`=with escapes`\t \t=`escaped`value",
    ];

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn single(key: &str, defaults: &[&str]) -> Result<Vec<String>> {
        lookup_values(SAMPLE_TXT_RECORDS, key, &strings(defaults), ValueType::Single)
    }

    fn list(key: &str, defaults: &[&str]) -> Result<Vec<String>> {
        lookup_values(SAMPLE_TXT_RECORDS, key, &strings(defaults), ValueType::List)
    }

    #[test]
    fn test_single_value_matches() {
        for (key, defaults, expected) in [
            ("foo", vec![], "bar"),
            ("FoO", vec![], "bar"),
            ("foo", vec!["default"], "bar"),
            ("nosuchkey", vec!["default value"], "default value"),
            ("empty", vec![], ""),
            (
                "spaces and multiple equals signs",
                vec![],
                "are no=problem at=all",
            ),
            ("cAmElCaSe", vec![], "CamelCaseValue"),
            ("Allcaps", vec![], "ALLCAPS VALUE"),
            ("with tabs\tand spaces", vec![], "  whitespace value\t "),
            (" key=with escapes\t", vec![], "`escaped`value"),
        ] {
            assert_eq!(
                single(key, &defaults).unwrap(),
                vec![expected.to_string()],
                "key {key:?}"
            );
        }
    }

    #[test]
    fn test_single_value_errors() {
        assert!(matches!(
            lookup_values::<&str>(&[], "foo", &[], ValueType::Single),
            Err(SdgetError::NoValueFound(_))
        ));
        assert!(matches!(
            single("nosuchkey", &[]),
            Err(SdgetError::NoValueFound(_))
        ));
        assert!(matches!(single("notkv", &[]), Err(SdgetError::NoValueFound(_))));
        match single("multival", &[]) {
            Err(SdgetError::AmbiguousValue { key, count }) => {
                assert_eq!(key, "multival");
                assert_eq!(count, 3);
            }
            other => panic!("expected AmbiguousValue, got {other:?}"),
        }
    }

    #[test]
    fn test_list_values() {
        assert_eq!(list("multival", &[]).unwrap(), strings(&["1", "2", "3"]));
        assert_eq!(list("foo", &[]).unwrap(), strings(&["bar"]));
        assert!(list("nosuchkey", &[]).unwrap().is_empty());
        assert_eq!(list("nosuchkey", &["1", "2"]).unwrap(), strings(&["1", "2"]));
    }

    #[test]
    fn test_defaults_are_not_case_adjusted() {
        assert_eq!(
            lookup_values(&["k=1"], "other", &strings(&["D"]), ValueType::Single).unwrap(),
            strings(&["D"])
        );
    }

    #[test]
    fn test_two_matches_under_list_and_single() {
        let records = ["k=1", "k=2"];
        assert!(matches!(
            lookup_values(&records, "k", &[], ValueType::Single),
            Err(SdgetError::AmbiguousValue { count: 2, .. })
        ));
        assert_eq!(
            lookup_values(&records, "k", &[], ValueType::List).unwrap(),
            strings(&["1", "2"])
        );
    }

    #[test]
    fn test_key_matching_is_case_insensitive() {
        assert_eq!(
            lookup_values(&["CamelCase=X"], "camelcase", &[], ValueType::Single).unwrap(),
            strings(&["X"])
        );
    }
}
