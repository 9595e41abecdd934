//! Logfile cleaning over a complete logfile

use geoclean::logfile::{clean_logfile, full_clean, segment, CleanMode, Program};

use crate::helpers::{fixture_lines, pick};

fn range(start: usize, end: usize) -> Vec<usize> {
    (start..=end).collect()
}

#[test]
fn blocks_are_segmented() {
    let lines = fixture_lines("LOGFILE.txt");
    let blocks = segment(&lines);
    let programs: Vec<Option<Program>> = blocks.iter().map(|b| b.program).collect();
    assert_eq!(
        programs,
        vec![
            Some(Program::Setup),
            Some(Program::Setup),
            Some(Program::Stakeout)
        ]
    );
    assert_eq!((blocks[2].start, blocks[2].end), (29, 42));
}

#[test]
fn content_clean_keeps_informative_blocks_whole() {
    let lines = fixture_lines("LOGFILE.txt");
    let output = clean_logfile(&lines, CleanMode::Content);

    let mut expected = range(0, 14);
    expected.extend(range(29, 42));
    assert_eq!(output, pick(&lines, &expected));
}

#[test]
fn content_clean_of_cleaned_file_is_unchanged() {
    let lines = fixture_lines("LOGFILE.txt");
    let once = clean_logfile(&lines, CleanMode::Content);
    let twice = clean_logfile(&once, CleanMode::Content);
    assert_eq!(twice, once);
    assert!(twice.iter().any(|l| l.starts_with("dE")));
    assert!(twice.iter().any(|l| l.starts_with("dN")));
}

#[test]
fn setup_block_without_results_is_dropped() {
    let lines = fixture_lines("LOGFILE.txt");
    let output = clean_logfile(&lines, CleanMode::Content);
    assert!(!output.iter().any(|l| l.contains("FS02")));
    assert!(!output.iter().any(|l| l.contains("Cancelled")));
}

#[test]
fn raw_clean_drops_lines_outside_blocks() {
    let lines = fixture_lines("LOGFILE.txt");
    let output = clean_logfile(&lines, CleanMode::Raw);
    let mut expected = range(0, 27);
    expected.extend(range(29, 42));
    assert_eq!(output, pick(&lines, &expected));
}

#[test]
fn full_clean_keeps_bodies_without_blank_lines() {
    let lines = fixture_lines("LOGFILE.txt");
    let output = full_clean(&lines);
    let mut expected = range(2, 9);
    expected.extend(range(31, 37));
    assert_eq!(output, pick(&lines, &expected));
}

#[test]
fn raw_clean_is_idempotent() {
    let lines = fixture_lines("LOGFILE.txt");
    let once = clean_logfile(&lines, CleanMode::Raw);
    assert_eq!(clean_logfile(&once, CleanMode::Raw), once);
}
