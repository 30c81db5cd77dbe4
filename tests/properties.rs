use jsonval::{Array, ErrorKind, Json, Kind, Object, ParseOptions};

fn parse(input: &str) -> Json {
    Json::parse(input).unwrap()
}

fn object(pairs: Vec<(&str, Json)>) -> Json {
    pairs.into_iter().collect()
}

fn sample_values() -> Vec<Json> {
    vec![
        Json::null(),
        Json::from(true),
        Json::from(false),
        Json::from(0),
        Json::from(-17),
        Json::from(i64::MAX),
        Json::from(3.25),
        Json::from(-0.001),
        Json::from(6.02e23),
        Json::from(1e-300),
        Json::from(""),
        Json::from("plain"),
        Json::from("quote \" backslash \\ slash / tab \t nl \n"),
        Json::from("\u{0}\u{1}\u{1f}\u{7f}"),
        Json::from("日本語 😀 \u{1D11E}"),
        Json::from(Array::new()),
        Json::from(Object::new()),
        vec![Json::from(1), Json::from("two"), Json::null()]
            .into_iter()
            .collect(),
        object(vec![
            ("z", Json::from(1)),
            ("a", vec![Json::from(Object::new()), Json::from(false)].into_iter().collect()),
            ("m\"k", object(vec![("inner", Json::from(2.5))])),
        ]),
    ]
}

#[test]
fn test_dump_then_parse_round_trips() {
    for v in sample_values() {
        let text = v.dump();
        assert_eq!(parse(&text), v, "{}", text);
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs = vec![
        "  [ 1 , 2.50 , -0 , 1E2, 0.1e-2 ]  ",
        r#"{"b":{"y":null,"x":[]},"a":"A\n\/"}"#,
        r#"{"dup": 1, "dup": [true, false]}"#,
        r#""𝄞""#,
        "123456789012345678901234567890",
        "-9.999e-5",
    ];
    for input in inputs {
        let once = parse(input).dump();
        let twice = parse(&once).dump();
        assert_eq!(once, twice, "{}", input);
    }
}

#[test]
fn test_non_finite_numbers_dump_as_null() {
    let v: Json = vec![Json::from(f64::NAN), Json::from(f64::INFINITY)]
        .into_iter()
        .collect();
    assert_eq!(v.dump(), "[null, null]");
    assert_eq!(parse(&v.dump()), parse("[null, null]"));
}

#[test]
fn test_misses_are_null() {
    let arr = parse("[1, 2, 3]");
    for i in vec![3, 4, 100, usize::MAX] {
        assert_eq!(arr.at(i).kind(), Kind::Null);
    }
    let obj = parse(r#"{"a": 1}"#);
    for k in vec!["b", "A", "", "a "] {
        assert_eq!(obj.at(k).kind(), Kind::Null);
    }
}

#[test]
fn test_size() {
    #[rustfmt::skip]
    let tests = vec![
        ("null", 0),
        ("1.5", 0),
        ("true", 0),
        (r#""abc""#, 3),
        (r#""été""#, 3),
        ("[[], {}, 1]", 3),
        (r#"{"a": 1, "b": 2}"#, 2),
    ];
    for (input, expected) in tests {
        assert_eq!(parse(input).size(), expected, "{}", input);
    }
}

#[test]
fn test_int_and_float_construction_compare_equal() {
    assert_eq!(Json::from(123), parse("123.0"));
    assert_eq!(parse("123"), Json::from(123.0));
    assert_eq!(parse("1e2"), parse("100"));
    assert_ne!(Json::from(1), Json::from("1"));
    assert_ne!(Json::from(0), Json::from(false));
    assert_ne!(Json::null(), Json::from(0));
}

#[test]
fn test_distinct_large_integers_are_not_equal() {
    let a = Json::from(9_007_199_254_740_993i64);
    let b = Json::from(9_007_199_254_740_992i64);
    assert_ne!(a, b);
    assert_ne!(a.dump(), b.dump());
    assert_ne!(parse("[999999999999999999]"), parse("[999999999999999998]"));
    assert_eq!(parse(&a.dump()), a);
}

#[test]
fn test_surrogate_pair() {
    let v = parse("\"\\uD834\\uDD1E\"");
    assert_eq!(v.kind(), Kind::String);
    assert_eq!(v.string(), "\u{1D11E}");
    assert_eq!(v.string().as_bytes(), "𝄞".as_bytes());
}

#[test]
fn test_object_with_array_round_trips() {
    let v = parse("{ \"a\" : [1,2,3] }");
    assert_eq!(v.size(), 1);
    assert_eq!(v.at("a").kind(), Kind::Array);
    assert_eq!(v.at("a").size(), 3);
    assert_eq!(v.dump(), r#"{"a": [1, 2, 3]}"#);
    assert_eq!(parse(&v.dump()), v);
}

#[test]
fn test_trailing_comma_is_rejected() {
    let e = Json::parse("[1,]").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidValue);
    let e = Json::parse(r#"{"a": 1,}"#).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MissingKey);
}

#[test]
fn test_max_depth_exceeded() {
    let depth = 64;
    let options = ParseOptions::new().with_max_depth(depth);
    let ok = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(Json::parse_with(&ok, &options).is_ok());

    let deep = format!("{}{}", "[".repeat(depth + 1), "]".repeat(depth + 1));
    let e = Json::parse_with(&deep, &options).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MaxDepthExceeded);

    let objects = format!("{}1{}", r#"{"k":"#.repeat(depth + 1), "}".repeat(depth + 1));
    let e = Json::parse_with(&objects, &options).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MaxDepthExceeded);
}

#[test]
fn test_sorting_heterogeneous_values() {
    let mut values = vec![
        parse(r#"{"a": 1}"#),
        parse("[2]"),
        parse("true"),
        parse(r#""s""#),
        parse("-4"),
        parse("null"),
        parse("[1, 5]"),
        parse("false"),
    ];
    values.sort();
    let dumped: Vec<String> = values.iter().map(Json::dump).collect();
    assert_eq!(
        dumped,
        vec!["null", "-4", r#""s""#, "false", "true", "[1, 5]", "[2]", r#"{"a": 1}"#]
    );
}

#[test]
fn test_error_display() {
    let e = Json::parse("{\n  \"a\" 1\n}").unwrap_err();
    assert_eq!(
        e.to_string(),
        "expected `:`, found `1` at line 2, column 7 (offset 8)"
    );
}
