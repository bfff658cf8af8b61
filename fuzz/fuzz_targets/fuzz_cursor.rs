#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strcursor::{
    CursorOptions, TextCursor,
    numeric::{high_precision_to_text, text_to_high_precision},
};

#[derive(Debug, Arbitrary)]
enum Op {
    SkipWhitespace,
    Advance,
    Delimited(u8, u8),
    Fixed(u8),
    NumericRun,
    Double,
    Literal(Vec<u8>),
    Append(Vec<u8>),
    AppendQuoted(Vec<u8>),
    AppendDouble(f64),
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    build: Option<(u8, Option<u16>)>,
    ops: Vec<Op>,
}

fn run(input: Input) {
    let cursor = match input.build {
        Some((initial, max)) => TextCursor::with_options(CursorOptions {
            initial_capacity: usize::from(initial),
            max_capacity: max.map(usize::from),
            ..CursorOptions::default()
        }),
        None => TextCursor::from_text(input.text),
    };
    let Ok(mut cursor) = cursor else {
        return;
    };

    let mut growth = cursor.growth_increment();
    for op in input.ops {
        let before = cursor.position();
        match op {
            Op::SkipWhitespace => cursor.advance_past_whitespace(),
            Op::Advance => {
                let _ = cursor.advance();
            }
            Op::Delimited(start, end) => {
                if cursor.extract_delimited(start, end).is_none() {
                    assert_eq!(cursor.position(), before);
                }
            }
            Op::Fixed(len) => match cursor.extract_fixed(usize::from(len)) {
                Some(bytes) => assert_eq!(cursor.position(), before + bytes.len()),
                None => assert_eq!(cursor.position(), before),
            },
            Op::NumericRun => {
                if let Some(run) = cursor.extract_numeric_run() {
                    assert_eq!(cursor.position(), before + run.len() - 1);
                }
            }
            Op::Double => {
                let _ = cursor.extract_f64();
            }
            Op::Literal(needle) => {
                if !cursor.starts_with(&needle) {
                    assert_eq!(cursor.position(), before);
                }
            }
            Op::Append(text) => {
                let _ = cursor.append_text(&text);
            }
            Op::AppendQuoted(text) => {
                let _ = cursor.append_quoted_text(&text);
            }
            Op::AppendDouble(value) => {
                let _ = cursor.append_f64(value);
            }
            Op::Reset => cursor.reset(),
        }
        assert!(cursor.position() <= cursor.capacity());
        assert!(cursor.growth_increment() >= growth);
        growth = cursor.growth_increment();
    }

    // Output that happens to be a number goes through the strict parser and back.
    if let Ok(text) = core::str::from_utf8(cursor.written()) {
        if let Ok(value) = text_to_high_precision(text) {
            let _ = high_precision_to_text(value).unwrap();
        }
    }
}

fuzz_target!(|input: Input| run(input));
