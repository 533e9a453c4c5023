use std::{fs, path::Path};

use paper_check::{
    document::read_document, report::write_result, similarity::SimilarityScore, Error,
    PaperChecker,
};

const ORIGINAL: &str = "今天是星期天，天气晴，今天晚上我要去看电影。";

fn check_files(dir: &Path, original: &[u8], candidate: &[u8]) -> String {
    let original_path = dir.join("orig.txt");
    let candidate_path = dir.join("copy.txt");
    let result_path = dir.join("out/result.txt");
    fs::write(&original_path, original).expect("Failed to write original");
    fs::write(&candidate_path, candidate).expect("Failed to write candidate");

    let checker = PaperChecker::new().expect("Failed to create checker");
    let original = read_document(&original_path).expect("Failed to read original");
    let candidate = read_document(&candidate_path).expect("Failed to read candidate");
    let score = SimilarityScore::new(checker.score(&original, &candidate));

    write_result(&result_path, score).expect("Failed to write result");
    fs::read_to_string(result_path).expect("Failed to read result")
}

#[test]
fn identical_texts() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = check_files(dir.path(), ORIGINAL.as_bytes(), ORIGINAL.as_bytes());
    assert_eq!(result, "100.00");
}

#[test]
fn partial_similarity() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = check_files(
        dir.path(),
        ORIGINAL.as_bytes(),
        "今天是周天，天气晴朗，我晚上要去看电影。".as_bytes(),
    );

    let percent: f64 = result.parse().expect("Result is not a number");
    assert!(percent > 50.0 && percent < 100.0, "got {percent}");
}

#[test]
fn no_overlap() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = check_files(dir.path(), "苹果".as_bytes(), "橙子".as_bytes());
    assert_eq!(result, "0.00");
}

#[test]
fn empty_candidate() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = check_files(dir.path(), ORIGINAL.as_bytes(), b"");
    assert_eq!(result, "0.00");
}

#[test]
fn gbk_candidate_matches_utf8_original() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let (gbk, _, had_errors) = encoding_rs::GBK.encode(ORIGINAL);
    assert!(!had_errors);

    let result = check_files(dir.path(), ORIGINAL.as_bytes(), &gbk);
    assert_eq!(result, "100.00");
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("non_exist.txt");

    assert!(matches!(
        read_document(&missing),
        Err(Error::InputNotFound(path)) if path == missing
    ));
}

#[test]
fn undecodable_input() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("binary.txt");
    fs::write(&path, [0xFF]).expect("Failed to write file");

    assert!(matches!(read_document(&path), Err(Error::DecodeFailure(_))));
}
