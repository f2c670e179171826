//! Tests for the streaming pipeline: header handling, ordering and the
//! drop-and-warn policy

use super::{HEADER, VALID_ROW, VALID_ROW_NORMALIZED, run_pipeline};
use crate::error::{NormalizerError, Result};
use crate::pipeline::{RowPipeline, RunStats};
use std::io::{self, Read};

const WARN_PREFIX: &str = "WARN: row will be omitted due to invalid input format: ";

#[test]
fn test_valid_row_normalized() {
    let output = run_pipeline(&format!("{}\n{}\n", HEADER, VALID_ROW));

    assert_eq!(
        output.stdout,
        format!("{}\n{}\n", HEADER, VALID_ROW_NORMALIZED)
    );
    assert!(output.stderr.is_empty());
    assert_eq!(output.stats.rows_read, 1);
    assert_eq!(output.stats.rows_written, 1);
    assert_eq!(output.stats.rows_dropped, 0);
}

#[test]
fn test_invalid_row_dropped_with_one_warning() {
    let bad_zip = VALID_ROW.replace(",94121,", ",abc,");
    let output = run_pipeline(&format!("{}\n{}\n{}\n", HEADER, bad_zip, VALID_ROW));

    assert_eq!(
        output.stdout,
        format!("{}\n{}\n", HEADER, VALID_ROW_NORMALIZED)
    );
    assert_eq!(
        output.stderr,
        format!("{}invalid zip code 'abc': not an integer\n", WARN_PREFIX)
    );
    assert_eq!(output.stats.rows_dropped, 1);
    assert_eq!(output.stats.rows_written, 1);
}

#[test]
fn test_every_bad_field_kind_reported() {
    let rows = [
        VALID_ROW.replace("4/1/11 11:00:00 AM", "2011-04-01"),
        VALID_ROW.replace(",94121,", ",9412x,"),
        VALID_ROW.replace("1:23:32.123", "1:23"),
        VALID_ROW.replace("1:32:33.123", "1:32:abc"),
        "4/1/11 11:00:00 AM,addr,94121".to_string(),
    ];
    let input = format!("{}\n{}\n", HEADER, rows.join("\n"));
    let output = run_pipeline(&input);

    assert_eq!(output.stdout, format!("{}\n", HEADER));
    assert_eq!(output.stderr.lines().count(), rows.len());
    assert!(output.stderr.lines().all(|line| line.starts_with(WARN_PREFIX)));
    assert_eq!(output.stats.rows_dropped, rows.len());
    assert!(!output.stats.is_successful());
}

#[test]
fn test_header_never_validated() {
    let output = run_pipeline(&format!("not,a,valid,header\n{}\n", VALID_ROW));

    assert!(output.stdout.starts_with("not,a,valid,header\n"));
    assert!(output.stderr.is_empty());
    assert_eq!(output.stats.rows_written, 1);
}

#[test]
fn test_header_rejoined_after_splitting() {
    let output = run_pipeline("\"Time stamp\",\"Address, full\",ZIP\n");

    assert_eq!(output.stdout, "Time stamp,Address, full,ZIP\n");
    assert_eq!(output.stats.rows_read, 0);
}

#[test]
fn test_row_order_preserved() {
    let later = VALID_ROW.replace("Monkey Alberto", "zed");
    let output = run_pipeline(&format!("{}\n{}\n{}\n", HEADER, VALID_ROW, later));

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("MONKEY ALBERTO"));
    assert!(lines[2].contains("ZED"));
}

#[test]
fn test_output_field_count_matches() {
    let output = run_pipeline(&format!("{}\n{}\n", HEADER, VALID_ROW));
    let line = output.stdout.lines().nth(1).unwrap();

    // The quoted address contributes two extra raw commas
    assert_eq!(line.split(',').count(), 8 + 2);
}

#[test]
fn test_empty_input_produces_nothing() {
    let output = run_pipeline("");

    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert_eq!(output.stats, RunStats::new());
}

#[test]
fn test_impossible_wall_clock_row_dropped() {
    let leap_second = VALID_ROW.replace("4/1/11 11:00:00 AM", "10/2/02 10:00:60 AM");
    let output = run_pipeline(&format!("{}\n{}\n{}\n", HEADER, leap_second, VALID_ROW));

    assert_eq!(
        output.stdout,
        format!("{}\n{}\n", HEADER, VALID_ROW_NORMALIZED)
    );
    assert_eq!(
        output.stderr,
        format!(
            "{}invalid timestamp '10/2/02 10:00:60 AM': expected M/D/YY HH:MM:SS AM/PM (second must be in 0..59)\n",
            WARN_PREFIX
        )
    );
    assert_eq!(output.stats.rows_dropped, 1);
}

#[test]
fn test_header_only_once_across_blank_first_rows() {
    let output = run_pipeline(&format!("\n{}\n\n{}\n", HEADER, VALID_ROW));

    assert_eq!(
        output.stdout,
        format!("{}\n{}\n", HEADER, VALID_ROW_NORMALIZED)
    );
    assert_eq!(output.stats.rows_read, 1);
}

#[test]
fn test_invalid_utf8_passes_through_as_replacement() {
    let mut input = format!("{}\n", HEADER).into_bytes();
    input.extend_from_slice(
        b"4/1/11 11:00:00 AM,addr,94121,caf\xe9 owner,0:00:01,0:00:02,0,n\xffotes\n",
    );

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    RowPipeline::default()
        .run(input.as_slice(), &mut stdout, &mut stderr)
        .unwrap();

    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains("CAF\u{FFFD} OWNER"));
    assert!(text.contains("n\u{FFFD}otes"));
    assert!(text.contains(",1.0,2.0,3.0,"));
}

#[test]
fn test_multiple_inputs_share_one_header() {
    let first = format!("{}\n{}\n", HEADER, VALID_ROW);
    let second = format!("{}\n{}\n", HEADER, VALID_ROW);

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let inputs: Vec<Result<&[u8]>> = vec![Ok(first.as_bytes()), Ok(second.as_bytes())];
    let stats = RowPipeline::default()
        .run_inputs(inputs, &mut stdout, &mut stderr)
        .unwrap();

    // The second header is data and fails timestamp validation
    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_written, 2);
    assert_eq!(stats.rows_dropped, 1);
    assert_eq!(String::from_utf8(stderr).unwrap().lines().count(), 1);
    assert_eq!(String::from_utf8(stdout).unwrap().lines().count(), 3);
}

#[test]
fn test_open_failure_is_fatal() {
    let first = format!("{}\n{}\n", HEADER, VALID_ROW);
    let inputs: Vec<Result<&[u8]>> = vec![
        Ok(first.as_bytes()),
        Err(NormalizerError::InputNotFound {
            path: "missing.csv".into(),
        }),
    ];

    let mut stdout = Vec::new();
    let result = RowPipeline::default().run_inputs(inputs, &mut stdout, io::sink());

    assert!(matches!(result, Err(NormalizerError::InputNotFound { .. })));
    // Rows already processed were written before the failure
    assert_eq!(String::from_utf8(stdout).unwrap().lines().count(), 2);
}

/// Reader that yields some bytes and then fails
struct FailingReader {
    data: Vec<u8>,
    position: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.position >= self.data.len() {
            return Err(io::Error::other("disk on fire"));
        }
        let count = buf.len().min(self.data.len() - self.position);
        buf[..count].copy_from_slice(&self.data[self.position..self.position + count]);
        self.position += count;
        Ok(count)
    }
}

#[test]
fn test_read_error_is_fatal() {
    let reader = FailingReader {
        data: format!("{}\n", HEADER).into_bytes(),
        position: 0,
    };

    let result = RowPipeline::default().run(reader, io::sink(), io::sink());
    assert!(result.is_err());
}
