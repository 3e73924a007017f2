use std::collections::HashSet;
use std::fs;

use file_analysis::{
    analyze_text, file_uri, list_files, read_file, read_file_resource, ListingReport,
    TOP_WORDS_LIMIT,
};
use tempfile::TempDir;

/// Integration test: a small project tree exercised through every public
/// operation, checking the results stay identical when repeated.
#[test]
fn operations_over_a_project_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), "The cat sat.\nThe cat ran.\n").unwrap();
    fs::create_dir(root.join("b")).unwrap();
    let root_str = root.to_str().unwrap();

    // Listing: one file, one directory. Order is OS-defined, so compare as sets.
    let listing = list_files(root_str).unwrap();
    let files: HashSet<_> = listing.files.iter().cloned().collect();
    let dirs: HashSet<_> = listing.directories.iter().cloned().collect();
    assert_eq!(files, HashSet::from(["a.txt".to_string()]));
    assert_eq!(dirs, HashSet::from(["b".to_string()]));
    assert_eq!(list_files(root_str).unwrap(), listing);

    // Reading then analyzing the file.
    let path = root.join("a.txt");
    let path_str = path.to_str().unwrap();
    let content = read_file(path_str).unwrap();
    let analysis = analyze_text(&content);
    assert_eq!(analysis.statistics.line_count, 2);
    assert_eq!(analysis.statistics.word_count, 6);
    assert_eq!(analysis.top_words.keys().next(), Some("the"));
    assert_eq!(analysis.top_words.get("cat"), Some(2));
    assert_eq!(analysis, analyze_text(&content));

    // Resource access mirrors read_file for present and absent paths.
    assert_eq!(read_file_resource(&file_uri(path_str)).unwrap(), content);
    let missing = root.join("missing.txt");
    let missing_str = missing.to_str().unwrap();
    assert_eq!(
        read_file_resource(&file_uri(missing_str))
            .unwrap_err()
            .to_string(),
        format!("Error: File not found at {missing_str}")
    );
}

#[test]
fn word_count_matches_whitespace_tokens() {
    let samples = [
        "",
        "   ",
        "one",
        "  leading and trailing  ",
        "tabs\tand\nnewlines\r\nmixed",
        "ünïcödé wörds ﬁne",
    ];
    for sample in samples {
        assert_eq!(
            analyze_text(sample).statistics.word_count,
            sample.split_whitespace().count(),
            "sample {sample:?}"
        );
    }
}

#[test]
fn top_words_never_exceed_limit() {
    let text = (0..500)
        .map(|i| format!("word{} ", i % 37))
        .collect::<String>();
    let analysis = analyze_text(&text);
    assert_eq!(analysis.top_words.len(), TOP_WORDS_LIMIT);
    assert!(analysis.top_words.iter().all(|(_, n)| n >= 13));
}

#[test]
fn missing_directory_report_is_error_object() {
    let report = ListingReport::from(list_files("does-not-exist-anywhere"));
    assert_eq!(
        serde_json::to_value(report).unwrap(),
        serde_json::json!({"error": "Directory not found: does-not-exist-anywhere"})
    );
}
