#![expect(missing_docs)]
#![allow(clippy::float_cmp)]

use strcursor::TextCursor;

#[derive(Debug, PartialEq)]
enum Scalar {
    Number(f64),
    Bool(bool),
    Null,
    Text(String),
}

/// Reads a flat `{"key": scalar, ...}` object the way a hand-written reader
/// built on the cursor would.
fn read_flat_object(text: &str) -> Option<Vec<(String, Scalar)>> {
    let mut c = TextCursor::from_text(text).ok()?;
    if c.peek()? <= b' ' {
        c.advance_past_whitespace();
    }
    if c.peek()? != b'{' {
        return None;
    }
    let mut fields = Vec::new();
    loop {
        c.advance_past_whitespace();
        if c.peek()? == b'}' {
            return Some(fields);
        }
        let key = c.extract_delimited(b'"', b'"')?.to_string();
        c.advance_past_whitespace();
        if c.peek()? != b':' {
            return None;
        }
        c.advance_past_whitespace();
        let value = if let Some(s) = c.extract_delimited(b'"', b'"') {
            Scalar::Text(s.to_string())
        } else if let Some(number) = c.extract_f64() {
            Scalar::Number(number)
        } else if let Some(flag) = c.extract_boolean() {
            Scalar::Bool(flag)
        } else if c.extract_literal("null", ()).is_some() {
            Scalar::Null
        } else {
            return None;
        };
        // literals are consumed whole; the other extractors stop on their last byte
        let consumed = matches!(value, Scalar::Bool(_) | Scalar::Null);
        fields.push((key, value));
        if !consumed || c.peek().is_some_and(|b| b <= b' ') {
            c.advance_past_whitespace();
        }
        match c.peek()? {
            b',' => {}
            b'}' => return Some(fields),
            _ => return None,
        }
    }
}

#[test]
fn reads_flat_object() {
    let text = " {\"a\": 1.5, \"b\" : true,\n\t\"c\":\"x y\", \"d\": null, \"e\": -2e3}";
    let fields = read_flat_object(text).expect("object");
    assert_eq!(
        fields,
        vec![
            ("a".to_string(), Scalar::Number(1.5)),
            ("b".to_string(), Scalar::Bool(true)),
            ("c".to_string(), Scalar::Text("x y".to_string())),
            ("d".to_string(), Scalar::Null),
            ("e".to_string(), Scalar::Number(-2000.0)),
        ]
    );
}

#[test]
fn rejects_unknown_value() {
    assert_eq!(read_flat_object("{\"a\": nope}"), None);
    assert_eq!(read_flat_object("[1]"), None);
}

#[test]
fn empty_object() {
    assert_eq!(read_flat_object("{ }"), Some(vec![]));
}
