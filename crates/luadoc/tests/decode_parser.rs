use luadoc::{
    DiagnosticKind, Number, Options, Value, parse_source, parse_table_str, parse_value_at,
};

fn table(entries: &[(&str, Value)]) -> Value {
    Value::Table(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

fn s(v: &str) -> Value {
    Value::String(v.to_string())
}

fn i(v: i64) -> Value {
    Value::Number(Number::I64(v))
}

#[test]
fn map_literal() {
    let p = parse_table_str(r#"{ Name = "Foo", Value = 42 }"#, &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("Name", s("Foo")), ("Value", i(42))]));
    assert!(p.diagnostics.is_empty());
}

#[test]
fn list_with_nested_map() {
    let p = parse_table_str("{ 1, 2, { Nested = true } }", &Options::default()).unwrap();
    assert_eq!(
        p.value,
        Value::Array(vec![i(1), i(2), table(&[("Nested", Value::Bool(true))])])
    );
}

#[test]
fn explicit_nil_binding_is_kept() {
    let p = parse_table_str("{ Flag = nil, Other = false }", &Options::default()).unwrap();
    assert_eq!(
        p.value,
        table(&[("Flag", Value::Null), ("Other", Value::Bool(false))])
    );
}

#[test]
fn explicit_nil_list_element_is_kept() {
    let p = parse_table_str("{ nil, 1 }", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![Value::Null, i(1)]));
}

#[test]
fn malformed_fragment_is_skipped() {
    let p = parse_table_str("{ a = 1, ###, b = 2 }", &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(1)), ("b", i(2))]));
    assert!(
        p.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::MalformedMapEntry)
    );
}

#[test]
fn stray_byte_in_list_is_skipped() {
    let p = parse_table_str("{ 1, #, 2 }", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![i(1), i(2)]));
    assert!(
        p.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::StrayCharacter)
    );
}

#[test]
fn escape_pairs_stay_verbatim() {
    let p = parse_table_str(r#"{ s = "he said \"hi\"" }"#, &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("s", s(r#"he said \"hi\""#))]));
}

#[test]
fn empty_table_is_a_list() {
    let p = parse_table_str("{}", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![]));
    let p = parse_table_str("{ -- nothing but trivia\n }", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![]));
}

#[test]
fn duplicate_key_last_write_wins() {
    let p = parse_table_str("{ a = 1, a = 2 }", &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(2))]));
}

#[test]
fn duplicate_key_keeps_first_slot() {
    let p = parse_table_str("{ a = 1, b = 2, a = 3 }", &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(3)), ("b", i(2))]));
}

#[test]
fn trailing_comma_is_tolerated() {
    let p = parse_table_str("{ 1, 2, }", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![i(1), i(2)]));
    let p = parse_table_str("{ a = 1, }", &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(1))]));
}

#[test]
fn comments_between_tokens() {
    let input = "{ -- header\n  a = 1, -- first\n  b = 2,\n}";
    let p = parse_table_str(input, &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(1)), ("b", i(2))]));
}

#[test]
fn barewords_and_numbers_classify() {
    let input = "{ e = Enum.HousingResult, f = 1.5, odd = 2.5.1, n = 7 }";
    let p = parse_table_str(input, &Options::default()).unwrap();
    assert_eq!(
        p.value,
        table(&[
            ("e", s("Enum.HousingResult")),
            ("f", Value::Number(Number::F64(1.5))),
            ("odd", s("2.5.1")),
            ("n", i(7)),
        ])
    );
}

#[test]
fn single_quoted_strings() {
    let p = parse_table_str("{ s = 'abc', t = 'he said \"hi\"' }", &Options::default()).unwrap();
    assert_eq!(
        p.value,
        table(&[("s", s("abc")), ("t", s("he said \"hi\""))])
    );
}

#[test]
fn unterminated_string_returns_partial_text() {
    let p = parse_table_str(r#"{ s = "abc"#, &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("s", s("abc"))]));
    assert_eq!(p.diagnostics.len(), 1);
    assert_eq!(p.diagnostics[0].kind, DiagnosticKind::UnterminatedString);
}

#[test]
fn end_offset_marks_trailing_content() {
    let input = "{1} trailing";
    let p = parse_value_at(input, 0, &Options::default()).unwrap();
    assert_eq!(p.end, 3);
    // re-parsing the consumed region yields a structurally equal value
    let again = parse_value_at(&input[..p.end], 0, &Options::default()).unwrap();
    assert_eq!(again.value, p.value);
}

#[test]
fn parse_at_offset() {
    let p = parse_value_at("x = {1}", 4, &Options::default()).unwrap();
    assert_eq!(p.value, Value::Array(vec![i(1)]));
    assert_eq!(p.end, 7);
}

#[test]
fn nothing_value_shaped_yields_null_without_progress() {
    let p = parse_value_at("", 0, &Options::default()).unwrap();
    assert_eq!(p.value, Value::Null);
    assert_eq!(p.end, 0);
}

#[test]
fn unterminated_table_degrades_to_partial() {
    let p = parse_table_str("{ a = 1, b = 2", &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("a", i(1)), ("b", i(2))]));
    assert_eq!(p.end, 14);
}

#[test]
fn source_prefix_is_skipped() {
    let input = "-- header comment\nlocal T =\n{\n\tName = \"T\",\n}\n";
    let p = parse_source(input, &Options::default()).unwrap();
    assert_eq!(p.value, table(&[("Name", s("T"))]));
}

#[test]
fn source_without_prefix_is_an_empty_table() {
    let p = parse_source("return 42", &Options::default()).unwrap();
    assert_eq!(p.value, Value::Table(vec![]));
    assert_eq!(p.end, 0);
}
