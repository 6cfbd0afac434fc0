use gradecut::theme;

#[test]
fn known_subjects_map_to_their_categories() {
    assert_eq!(theme::subject_category("국어"), "korean");
    assert_eq!(theme::subject_category("수학"), "math");
    assert_eq!(theme::subject_category("영어"), "english");
    assert_eq!(theme::subject_category("한국사"), "history");
    assert_eq!(theme::subject_category("사회탐구"), "social");
    assert_eq!(theme::subject_category("과학탐구"), "science");
}

#[test]
fn unrecognized_subjects_fall_back_to_all() {
    assert_eq!(theme::subject_category("제2외국어"), "all");
    assert_eq!(theme::subject_category(""), "all");
}

#[test]
fn math_gets_two_columns_everything_else_three() {
    assert_eq!(theme::column_classes("math"), "md:grid-cols-2");
    assert_eq!(theme::column_classes("korean"), "md:grid-cols-3");
    assert_eq!(theme::column_classes("social"), "md:grid-cols-3");
    assert_eq!(theme::column_classes("all"), "md:grid-cols-3");
}

#[test]
fn badge_buckets_compare_text_not_numbers() {
    let gold = theme::badge_classes("1");
    let silver = theme::badge_classes("2");
    let plain = theme::badge_classes("3");

    assert!(gold.contains("bg-[#F4B733]"));
    assert!(silver.contains("bg-slate-200"));
    assert!(plain.contains("bg-slate-100"));

    // "10" is not "1": same bucket as any grade >= 3.
    assert_eq!(theme::badge_classes("10"), plain);
    assert_eq!(theme::badge_classes("원점수"), plain);
}

#[test]
fn only_the_top_grade_value_is_gold() {
    assert!(theme::value_classes("1").contains("text-[#d69e26]"));
    assert!(theme::value_classes("2").contains("text-slate-700"));
    assert!(theme::value_classes("10").contains("text-slate-700"));
}

#[test]
fn filter_bar_starts_with_the_show_all_button() {
    assert_eq!(theme::FILTER_BUTTONS[0], ("all", "전체보기"));
    assert_eq!(theme::FILTER_BUTTONS.len(), 7);
}
