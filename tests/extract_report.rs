use gradecut::config::Extraction;
use gradecut::extract::{Extractor, RegexExtractor};

fn extractor() -> RegexExtractor {
    RegexExtractor::new(&Extraction::default())
}

const TWO_SUBJECTS: &str = r#"
<div class="top-year">2024 <b>6월</b> 모의평가</div>
<div class="subject-btn">국어</div>
<div class="sub-box">
    <div class="sub-title">화법과 작문</div>
    <div class="sub-diff">난이도: 보통</div>
    <div class="cut-area">1등급:92<br>2등급:88</div>
</div>
<div class="sub-box">
    <div class="sub-title">언어와 매체</div>
    <div class="sub-diff">난이도: 어려움</div>
    <div class="cut-area">1등급:89</div>
</div>
<div class="subject-btn">수학</div>
<div class="sub-box">
    <div class="sub-title">미적분</div>
    <div class="sub-diff">난이도: 매우 어려움</div>
    <div class="cut-area">1등급:84</div>
</div>
"#;

#[test]
fn subjects_and_cards_come_out_in_source_order() {
    let report = extractor().extract(TWO_SUBJECTS, "fallback");
    let names: Vec<&str> = report.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["국어", "수학"]);

    let korean_titles: Vec<&str> = report.subjects[0]
        .cards
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(korean_titles, ["화법과 작문", "언어와 매체"]);
    assert_eq!(report.subjects[1].cards.len(), 1);
    assert_eq!(report.card_count(), 3);
}

#[test]
fn heading_is_cleaned_from_the_top_year_element() {
    let report = extractor().extract(TWO_SUBJECTS, "fallback");
    assert_eq!(report.heading, "2024 6월 모의평가");
}

#[test]
fn heading_falls_back_to_the_given_stem() {
    let html = r#"<div class="subject-btn">수학</div>
<div class="sub-box"><div class="sub-title">공통</div><div class="sub-diff">보통</div><div class="cut-area">1등급:84</div></div>"#;
    let report = extractor().extract(html, "고3 등급컷 2024 6월");
    assert_eq!(report.heading, "고3 등급컷 2024 6월");
}

#[test]
fn difficulty_keeps_text_after_the_first_colon_or_whole_text() {
    let report = extractor().extract(TWO_SUBJECTS, "fallback");
    assert_eq!(report.subjects[0].cards[0].difficulty, "보통");

    let html = r#"<div class="subject-btn">수학</div>
<div class="sub-box"><div class="sub-title">공통</div><div class="sub-diff">어려움</div><div class="cut-area">1등급:84</div></div>"#;
    let report = extractor().extract(html, "fallback");
    assert_eq!(report.subjects[0].cards[0].difficulty, "어려움");
}

#[test]
fn card_scope_is_positional_between_markers() {
    // The second card sits after the 수학 marker, so it belongs to 수학 even
    // though nothing structurally contains it.
    let html = r#"
<div class="subject-btn">국어</div>
<div class="sub-box"><div class="sub-title">A</div><div class="sub-diff">x</div><div class="cut-area">1등급:92</div></div>
<div class="subject-btn">수학</div>
<div class="sub-box"><div class="sub-title">B</div><div class="sub-diff">y</div><div class="cut-area">1등급:84</div></div>
"#;
    let report = extractor().extract(html, "fallback");
    assert_eq!(report.subjects[0].cards[0].title, "A");
    assert_eq!(report.subjects[1].cards[0].title, "B");
}

#[test]
fn card_with_no_usable_rows_is_pruned() {
    let html = r#"
<div class="subject-btn">국어</div>
<div class="sub-box"><div class="sub-title">A</div><div class="sub-diff">x</div><div class="cut-area">추후 공개</div></div>
<div class="sub-box"><div class="sub-title">B</div><div class="sub-diff">y</div><div class="cut-area">1등급:92</div></div>
"#;
    let report = extractor().extract(html, "fallback");
    assert_eq!(report.subjects.len(), 1);
    let titles: Vec<&str> = report.subjects[0]
        .cards
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, ["B"]);
}

#[test]
fn subject_with_no_retained_cards_is_pruned() {
    let html = r#"
<div class="subject-btn">영어</div>
<div class="sub-box"><div class="sub-title">A</div><div class="sub-diff">x</div><div class="cut-area">미정</div></div>
<div class="subject-btn">수학</div>
<div class="sub-box"><div class="sub-title">B</div><div class="sub-diff">y</div><div class="cut-area">1등급:84</div></div>
"#;
    let report = extractor().extract(html, "fallback");
    let names: Vec<&str> = report.subjects.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["수학"]);
}

#[test]
fn document_without_markers_yields_an_empty_report() {
    let report = extractor().extract("<p>nothing to see</p>", "stem");
    assert!(report.is_empty());
    assert_eq!(report.heading, "stem");
}
