use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::PipelineError;

/// One input line's parsed integers.
pub type Record = Vec<i64>;

/// All records from a file, in input line order.
pub type Dataset = Vec<Record>;

/// Reads `path` line by line into a dataset.
///
/// Lines that yield no integers (blank lines, or lines whose first token is
/// not an integer) produce no record. Within a line, parsing stops at the
/// first token that is not a base-10 integer: the valid prefix is kept and
/// the rest of the line is discarded.
pub fn read_input(path: &Path) -> Result<Dataset, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::file_access(path, source))?;
    let reader = BufReader::new(file);

    let mut dataset = Dataset::new();
    for line in reader.lines() {
        let line = line.map_err(|source| PipelineError::file_access(path, source))?;
        if let Some(record) = parse_record(line.trim()) {
            dataset.push(record);
        }
    }
    Ok(dataset)
}

/// Parses one line's whitespace-separated tokens left to right, stopping at
/// the first bad token. Returns `None` when no token parses.
fn parse_record(line: &str) -> Option<Record> {
    let mut record = Record::new();
    for token in line.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) => record.push(value),
            Err(err) => {
                warn!("bad token {token:?} ({err}), skipping rest of line");
                break;
            }
        }
    }
    if record.is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Writes one space-separated line per record, truncating any existing file
/// at `path`. Every record ends with a line break, the last one included.
pub fn write_output(path: &Path, dataset: &Dataset) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::file_access(path, source))?;
    let mut writer = BufWriter::new(file);

    for record in dataset {
        let line = record
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}").map_err(|source| PipelineError::file_access(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| PipelineError::file_access(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::sort_dataset;
    use std::fs;

    #[test]
    fn parses_a_line_of_integers() {
        assert_eq!(parse_record("10 -2 0"), Some(vec![10, -2, 0]));
    }

    #[test]
    fn stops_at_first_bad_token() {
        assert_eq!(parse_record("3 4 x 5"), Some(vec![3, 4]));
    }

    #[test]
    fn drops_lines_without_integers() {
        assert_eq!(parse_record(""), None);
        assert_eq!(parse_record("abc 1 2"), None);
    }

    #[test]
    fn out_of_range_token_truncates_the_line() {
        assert_eq!(parse_record("1 99999999999999999999 2"), Some(vec![1]));
    }

    #[test]
    fn reads_records_in_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "  5 3 1 4 2  \n10 -2 0\n\nabc\n7 7 7\n").unwrap();

        let dataset = read_input(&input).unwrap();
        assert_eq!(
            dataset,
            vec![vec![5, 3, 1, 4, 2], vec![10, -2, 0], vec![7, 7, 7]]
        );
    }

    #[test]
    fn missing_input_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, PipelineError::FileAccess { .. }));
    }

    #[test]
    fn writes_sorted_lines_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "5 3 1 4 2\n10 -2 0\nabc\n7 7 7\n").unwrap();

        let sorted = sort_dataset(read_input(&input).unwrap());
        write_output(&output, &sorted).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "1 2 3 4 5\n-2 0 10\n7 7 7\n"
        );
    }

    #[test]
    fn empty_input_produces_an_empty_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "").unwrap();

        let dataset = read_input(&input).unwrap();
        assert!(dataset.is_empty());
        write_output(&output, &dataset).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn overwrites_an_existing_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output.txt");
        fs::write(&output, "stale contents\n").unwrap();

        write_output(&output, &vec![vec![1, 2]]).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "1 2\n");
    }
}
