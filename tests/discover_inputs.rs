use gradecut::config::Discovery;
use gradecut::discover::{discover, slug_for};
use std::path::Path;

#[test]
fn only_prefixed_html_files_are_discovered_in_sorted_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for name in [
        "고3 등급컷 2024 6월.html",
        "고3 등급컷 2023 9월.html",
        "고3 등급컷 메모.txt",
        "등급컷 2024.html",
        "unrelated.html",
    ] {
        std::fs::write(root.join(name), "x").unwrap();
    }
    std::fs::create_dir(root.join("고3 등급컷 폴더.html")).unwrap();

    let cfg = Discovery::default();
    let pages = discover(&cfg, root).unwrap();

    let slugs: Vec<&str> = pages.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["2023 9월", "2024 6월"]);
}

#[test]
fn extension_match_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("고3 등급컷 2024.HTML"), "x").unwrap();

    let pages = discover(&Discovery::default(), dir.path()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].slug, "2024");
}

#[test]
fn missing_dir_is_an_error() {
    let cfg = Discovery::default();
    assert!(discover(&cfg, Path::new("/nonexistent/gradecut-test")).is_err());
}

#[test]
fn slug_falls_back_to_the_whole_stem() {
    let cfg = Discovery::default();
    assert_eq!(
        slug_for(&cfg, Path::new("고3 등급컷 2024 6월.html")),
        "2024 6월"
    );
    assert_eq!(slug_for(&cfg, Path::new("some page.html")), "some page");
}
