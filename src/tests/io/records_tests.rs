//! Tests for line-aware record decoding.

use std::io::Cursor;

use csv::StringRecord;

use crate::io::RecordReader;
use crate::io::records::ends_inside_quotes;

fn read_all(input: &str) -> Vec<Vec<String>> {
    let mut rdr = RecordReader::new(Cursor::new(input.as_bytes()), b',');
    let mut record = StringRecord::new();
    let mut rows = Vec::new();
    while rdr.read_record(&mut record).expect("valid input") {
        rows.push(record.iter().map(str::to_owned).collect());
    }
    rows
}

#[test]
fn blank_lines_are_empty_records() {
    assert_eq!(
        read_all("\na,b\n\n\nc\n"),
        vec![
            vec![],
            vec!["a".to_string(), "b".to_string()],
            vec![],
            vec![],
            vec!["c".to_string()],
        ]
    );
}

#[test]
fn crlf_blank_line_is_one_record() {
    assert_eq!(read_all("a\r\n\r\nb\r\n").len(), 3);
}

#[test]
fn trailing_newline_adds_no_record() {
    assert_eq!(read_all("a\nb\n"), read_all("a\nb"));
    assert!(read_all("").is_empty());
}

#[test]
fn quoted_field_spans_lines() {
    assert_eq!(
        read_all("1,\"two\nlines\",3\n4\n"),
        vec![
            vec!["1".to_string(), "two\nlines".to_string(), "3".to_string()],
            vec!["4".to_string()],
        ]
    );
}

#[test]
fn unterminated_quote_runs_to_end_of_input() {
    assert_eq!(read_all("\"open,1\n2\n").len(), 1);
}

#[test]
fn whitespace_only_line_is_one_field() {
    assert_eq!(read_all(" \n"), vec![vec![" ".to_string()]]);
}

#[test]
fn invalid_utf8_is_an_error() {
    let mut rdr = RecordReader::new(Cursor::new(&b"a,\xff\n"[..]), b',');
    let mut record = StringRecord::new();
    assert!(rdr.read_record(&mut record).is_err());
}

#[test]
fn quote_state_tracks_field_starts() {
    assert!(!ends_inside_quotes("a,b,c\n", b','));
    assert!(ends_inside_quotes("a,\"b\n", b','));
    assert!(!ends_inside_quotes("a,\"b\nc\",d\n", b','));
    assert!(ends_inside_quotes("a,\"say \"\"hi\n", b','));
    assert!(!ends_inside_quotes("a,b\"c\n", b','));
    assert!(!ends_inside_quotes("\"x\"y\"z\n", b','));
}
