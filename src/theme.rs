//! Fixed presentation lookups. Pure, stateless mappings from parsed data to
//! category tags and Tailwind class strings; nothing here inspects config.

/// Filter bar entries in display order: (category tag, button label).
/// The first entry is the initially active "show everything" button.
pub const FILTER_BUTTONS: &[(&str, &str)] = &[
    ("all", "전체보기"),
    ("korean", "국어"),
    ("math", "수학"),
    ("english", "영어"),
    ("history", "한국사"),
    ("social", "사회탐구"),
    ("science", "과학탐구"),
];

/// Category tag for a subject name. Unrecognized names fall into "all",
/// which the client-side filter never hides.
pub fn subject_category(name: &str) -> &'static str {
    match name {
        "국어" => "korean",
        "수학" => "math",
        "영어" => "english",
        "한국사" => "history",
        "사회탐구" => "social",
        "과학탐구" => "science",
        _ => "all",
    }
}

/// Grid column classes per category. Math sections use two columns; every
/// other category uses three.
pub fn column_classes(category: &str) -> &'static str {
    match category {
        "math" => "md:grid-cols-2",
        _ => "md:grid-cols-3",
    }
}

/// Badge classes keyed on textual equality of the grade id. "10" is not "1"
/// and lands in the default bucket.
pub fn badge_classes(grade: &str) -> &'static str {
    match grade {
        "1" => "w-6 h-6 rounded-md flex items-center justify-center text-xs font-bold bg-[#F4B733] text-white",
        "2" => "w-6 h-6 rounded-md flex items-center justify-center text-xs font-bold bg-slate-200 text-slate-600",
        _ => "w-6 h-6 rounded-md flex items-center justify-center text-xs font-bold bg-slate-100 text-slate-400",
    }
}

/// Value text classes; the top grade gets the gold accent.
pub fn value_classes(grade: &str) -> &'static str {
    if grade == "1" {
        "font-bold text-[#d69e26]"
    } else {
        "font-bold text-slate-700"
    }
}
