use super::{Entry, decode, decode::Error, encode, scan};

#[test]
fn base_case() {
    let data = br#"{"0": null, "1": 0, "2": "s", "3": [null, 0, "string", [], {}], "4": {"0": null, "1": 0, "2": "s", "3": [], "4": {}}}"#;
    let object = decode::parse(data).unwrap();

    let expected: &[(&[u8], &[u8])] = &[
        (br#""0""#, b"null"),
        (br#""1""#, b"0"),
        (br#""2""#, br#""s""#),
        (br#""3""#, br#"[null, 0, "string", [], {}]"#),
        (br#""4""#, br#"{"0": null, "1": 0, "2": "s", "3": [], "4": {}}"#),
    ];
    assert_eq!(expected.len(), object.len());
    for (entry, &(key, value)) in object.iter().zip(expected) {
        assert_eq!(&Entry { key, value }, entry);
    }
}

#[test]
fn order_is_source_order() {
    let object = decode::parse(br#"{"z":1,"a":2,"m":3,"a":4}"#).unwrap();
    let keys = object.iter().map(|e| e.key).collect::<Vec<_>>();

    // Not sorted, and the duplicate "a" is kept as a separate entry
    assert_eq!(
        vec![
            br#""z""#.as_slice(),
            br#""a""#.as_slice(),
            br#""m""#.as_slice(),
            br#""a""#.as_slice(),
        ],
        keys
    );
    assert_eq!(b"2", object[1].value);
    assert_eq!(b"4", object[3].value);
}

#[test]
fn round_trip_identity() {
    for input in [
        r#"{}"#,
        r#"{"a":1}"#,
        r#"{"b":1,"a":{"y":2,"x":3}}"#,
        r#"{"a":[1,[2,{"c":null}],"x"],"a":false}"#,
        r#"{"\u00e9\n":"\\escape\""}"#,
    ] {
        let object = decode::parse(input.as_bytes()).unwrap();
        assert_eq!(input.as_bytes(), encode::emit(&object).as_slice());
    }
}

#[test]
fn raw_values_are_not_reinterpreted() {
    let data = br#"{"a":1.0,"b":1e10,"c":-0,"d":0.500,"e":1E+2}"#;
    let object = decode::parse(data).unwrap();
    assert_eq!(b"1.0", object[0].value);
    assert_eq!(b"1e10", object[1].value);
    assert_eq!(b"-0", object[2].value);
    assert_eq!(b"0.500", object[3].value);
    assert_eq!(b"1E+2", object[4].value);
    assert_eq!(data, encode::emit(&object).as_slice());
}

#[test]
fn empty_object() {
    let object = decode::parse(b"{}").unwrap();
    assert!(object.is_empty());

    let object = decode::parse(b" { } ").unwrap();
    assert!(object.is_empty());
}

#[test]
fn non_objects_are_rejected() {
    assert_eq!(Err(Error::NotAnObject), decode::parse(b"[1,2,3]"));
    assert_eq!(Err(Error::NotAnObject), decode::parse(b"\"scalar\""));
    assert_eq!(Err(Error::NotAnObject), decode::parse(b"42"));
    assert_eq!(Err(Error::NotAnObject), decode::parse(b"null"));
    assert_eq!(Err(Error::NotAnObject), decode::parse(b""));
    assert_eq!(Err(Error::NotAnObject), decode::parse(b"  \n  "));
}

#[test]
fn nested_order_composes() {
    let object = decode::parse(br#"{"b":1,"a":{"y":2,"x":3}}"#).unwrap();
    assert_eq!(2, object.len());
    assert_eq!(br#""b""#, object[0].key);
    assert_eq!(br#""a""#, object[1].key);
    assert_eq!(br#"{"y":2,"x":3}"#, object[1].value);

    // One level deeper on demand, with the same decoder
    let nested = decode::parse(object[1].value).unwrap();
    assert_eq!(br#""y""#, nested[0].key);
    assert_eq!(b"2", nested[0].value);
    assert_eq!(br#""x""#, nested[1].key);
    assert_eq!(b"3", nested[1].value);
}

#[test]
fn malformed_is_not_confused_with_shape() {
    // A missing value is a parse failure, not a shape failure
    assert_eq!(
        Err(Error::Malformed(scan::Error::UnexpectedByte(b'}', 6))),
        decode::parse(br#"{"a": }"#)
    );
    assert!(matches!(
        decode::parse(br#"{"a":1"#),
        Err(Error::Malformed(scan::Error::NotEnoughData))
    ));
    assert!(matches!(
        decode::parse(br#"{"a}"#),
        Err(Error::Malformed(scan::Error::UnterminatedString(_)))
    ));
    assert!(matches!(
        decode::parse(br#"{"a":[1,2}"#),
        Err(Error::Malformed(scan::Error::UnexpectedByte(b'}', _)))
    ));
}

#[test]
fn spans_never_include_whitespace() {
    let object = decode::parse(b" { \"a\" : 1 , \"b\" : true } ").unwrap();
    assert_eq!(b"\"a\"", object[0].key);
    assert_eq!(b"1", object[0].value);
    assert_eq!(b"\"b\"", object[1].key);
    assert_eq!(b"true", object[1].value);

    // Re-encoding always produces compact form
    assert_eq!(br#"{"a":1,"b":true}"#, encode::emit(&object).as_slice());
}

#[test]
fn parse_detail_reports_end_offset() {
    let data = br#"{"a":1} trailing"#;
    let (object, end) = decode::parse_detail(data, 0).unwrap();
    assert_eq!(7, end);
    assert_eq!(1, object.len());

    // A non-zero start offset decodes an object embedded mid-buffer
    let data = br#"xx{"a":1}"#;
    let (object, end) = decode::parse_detail(data, 2).unwrap();
    assert_eq!(data.len(), end);
    assert_eq!(b"1", object[0].value);
}

#[test]
fn captured_spans_are_valid_json() {
    let data = br#"{"k\u0041":[1,{"a":"\t"}],"n":-1.5e-3,"s":"x","b":false}"#;
    let object = decode::parse(data).unwrap();
    assert_eq!(4, object.len());
    for entry in &object {
        let key: serde_json::Value = serde_json::from_slice(entry.key).unwrap();
        assert!(key.is_string());
        serde_json::from_slice::<serde_json::Value>(entry.value).unwrap();
    }
}

#[test]
fn depth_limit_is_a_parse_failure() {
    let mut deep = String::from(r#"{"a":"#);
    for _ in 0..scan::MAX_DEPTH + 8 {
        deep.push('{');
        deep.push_str(r#""a":"#);
    }
    assert!(matches!(
        decode::parse(deep.as_bytes()),
        Err(Error::Malformed(scan::Error::TooDeep(_)))
    ));
}
