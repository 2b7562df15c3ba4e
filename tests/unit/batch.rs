//! Batch runs over file-backed sources.

use seqpat::{analyze, load_all, FileSource, SequenceError, Span};

use super::common::{write_files, CODES, TRANSMISSION_1, TRANSMISSION_2};

fn fixture_sources() -> (tempfile::TempDir, Vec<FileSource>, Vec<FileSource>) {
    let (dir, paths) = write_files(&[
        ("transmission1.txt", TRANSMISSION_1),
        ("transmission2.txt", TRANSMISSION_2),
        ("mcode1.txt", CODES[0]),
        ("mcode2.txt", CODES[1]),
        ("mcode3.txt", CODES[2]),
    ]);
    let sources: Vec<FileSource> = paths.iter().map(FileSource::new).collect();
    let (targets, patterns) = sources.split_at(2);
    (dir, targets.to_vec(), patterns.to_vec())
}

#[test]
fn report_over_files() {
    let (_dir, targets, patterns) = fixture_sources();
    let targets = load_all(&targets, false).unwrap();
    let patterns = load_all(&patterns, false).unwrap();

    let report = analyze(&targets, &patterns);

    let part1: Vec<Option<usize>> = report
        .containment
        .iter()
        .map(|pair| pair.result.position().map(|p| p.get()))
        .collect();
    assert_eq!(part1, vec![Some(13), Some(7), None, None, None, None]);

    assert_eq!(report.palindromes[0].text, b"010");
    assert_eq!(report.palindromes[1].text, b"racecar");

    let common = report.common.expect("two targets");
    assert_eq!(common.text, b"ABCDEF");
    assert_eq!(common.span, Span::new(1, 6).unwrap());
    assert_eq!(common.other_span, Span::new(6, 11).unwrap());
}

#[test]
fn missing_file_is_an_error_unless_lenient() {
    let (dir, mut targets, _) = fixture_sources();
    targets.push(FileSource::new(dir.path().join("transmission3.txt")));

    assert!(matches!(
        load_all(&targets, false),
        Err(SequenceError::Io { .. })
    ));

    let loaded = load_all(&targets, true).unwrap();
    assert_eq!(loaded.len(), 3);
    assert!(loaded[2].is_empty());
}
