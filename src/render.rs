//! Report → complete HTML document. Pure string assembly, no I/O; the same
//! report always renders to byte-identical text.

use crate::config::Rendering;
use crate::model::{Card, GradeRow, Report, Subject, GRADE_PLACEHOLDER};
use crate::theme;

// Document chrome around the generated sections. CDN references only; the
// output stays a single self-contained file.
const DOC_HEAD_OPEN: &str = r##"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"##;

const DOC_HEAD_CLOSE: &str = r##"</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@400;500;700;900&display=swap" rel="stylesheet">
    <script src="https://unpkg.com/lucide@latest"></script>
    <style>
        body { font-family: 'Noto Sans KR', sans-serif; }
        .fade-in { animation: fadeIn 0.5s ease-out forwards; }
        @keyframes fadeIn { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
    </style>
    <script>
        tailwind.config = {
            theme: {
                extend: {
                    colors: {
                        primary: '#F4B733',
                    }
                }
            }
        }
    </script>
</head>
<body class="bg-[#f4f5f7] min-h-screen selection:bg-yellow-200 selection:text-slate-900">
    <nav class="sticky top-0 z-40 w-full bg-white/80 backdrop-blur-md border-b border-slate-100">
        <div class="max-w-[1200px] mx-auto px-4 h-16 flex items-center justify-between">
            <a href="#" class="flex items-center gap-3">
                <div class="w-10 h-10 bg-white rounded-lg flex items-center justify-center shadow-sm border border-slate-100">
                    <span class="font-bold text-slate-900">수</span>
                </div>
                <span class="text-xl font-extrabold text-slate-800">수능기출</span>
            </a>
            <div class="hidden md:flex gap-6 text-sm font-bold text-slate-600">
                <a href="#" class="hover:text-[#F4B733]">고3</a>
                <a href="#" class="hover:text-[#F4B733]">고2</a>
                <a href="#" class="hover:text-[#F4B733]">고1</a>
                <a href="#" class="text-[#F4B733]">등급컷</a>
                <a href="#" class="hover:text-[#F4B733]">커뮤니티</a>
            </div>
            <button class="md:hidden p-2">
                <i data-lucide="menu"></i>
            </button>
        </div>
    </nav>
    <main class="max-w-[1000px] mx-auto px-4 pt-24 pb-20">
        <div class="flex flex-col md:flex-row items-center justify-center gap-4 mb-12 text-center md:text-left">
            <div class="w-20 h-20 bg-white rounded-2xl shadow-md flex items-center justify-center border border-slate-100">
                <span class="text-3xl font-black text-slate-900">수</span>
            </div>
            <div>
                <h1 class="text-3xl md:text-5xl font-black text-slate-900 tracking-tight">"##;

const FILTER_BAR_OPEN: &str = r##"</h1>
            </div>
        </div>
        <div class="flex flex-wrap justify-center gap-2 mb-10 sticky top-20 z-20 bg-[#f4f5f7]/95 backdrop-blur-sm py-4 rounded-2xl" id="filter-container">
"##;

const CONTENT_OPEN: &str = r##"        </div>
        <div class="space-y-8" id="content-area">
"##;

const DOC_TAIL: &str = r##"        </div>
        <div class="mt-20 text-center">
            <button onclick="history.back()" class="px-8 py-4 bg-white border-2 border-slate-200 text-slate-600 font-bold rounded-2xl hover:bg-slate-50 hover:border-slate-300 transition-all transform hover:-translate-y-1 shadow-sm">
                ← 이전 화면으로 돌아가기
            </button>
        </div>
    </main>
    <script>
        lucide.createIcons();
        function filter(category) {
            const buttons = document.querySelectorAll('.filter-btn');
            const sections = document.querySelectorAll('.subject-section');
            buttons.forEach(btn => {
                if (btn.dataset.target === category) {
                    btn.className = "filter-btn active px-5 py-2.5 rounded-full font-bold text-sm transition-all shadow-sm bg-[#F4B733] text-white shadow-yellow-200 ring-2 ring-yellow-100";
                } else {
                    btn.className = "filter-btn px-5 py-2.5 rounded-full font-bold text-sm transition-all shadow-sm bg-white text-slate-600 hover:bg-slate-50 border border-slate-200";
                }
            });
            sections.forEach(section => {
                section.classList.remove('fade-in');
                void section.offsetWidth;
                if (category === 'all' || section.dataset.category === category) {
                    section.style.display = 'block';
                    section.classList.add('fade-in');
                } else {
                    section.style.display = 'none';
                }
            });
        }
    </script>
</body>
</html>
"##;

// Button classes mirror the literals in the embedded filter script.
const FILTER_BTN_ACTIVE: &str = "filter-btn active px-5 py-2.5 rounded-full font-bold text-sm transition-all shadow-sm bg-[#F4B733] text-white shadow-yellow-200 ring-2 ring-yellow-100";
const FILTER_BTN_IDLE: &str = "filter-btn px-5 py-2.5 rounded-full font-bold text-sm transition-all shadow-sm bg-white text-slate-600 hover:bg-slate-50 border border-slate-200";

pub struct Renderer {
    escape_text: bool,
}

impl Renderer {
    pub fn new(cfg: &Rendering) -> Self {
        Self {
            escape_text: cfg.escape_text,
        }
    }

    /// Interpolated text goes through here exactly once.
    fn text(&self, raw: &str) -> String {
        if self.escape_text {
            escape_html(raw)
        } else {
            raw.to_string()
        }
    }

    pub fn render_page(&self, report: &Report) -> String {
        let title = self.text(&report.heading);

        let mut page = String::with_capacity(16 * 1024);
        page.push_str(DOC_HEAD_OPEN);
        page.push_str(&title);
        page.push_str(DOC_HEAD_CLOSE);
        page.push_str(&title);
        page.push_str(FILTER_BAR_OPEN);

        for (idx, (target, label)) in theme::FILTER_BUTTONS.iter().enumerate() {
            let classes = if idx == 0 {
                FILTER_BTN_ACTIVE
            } else {
                FILTER_BTN_IDLE
            };
            page.push_str(&format!(
                "            <button onclick=\"filter('{target}')\" class=\"{classes}\" data-target=\"{target}\">{label}</button>\n",
            ));
        }

        page.push_str(CONTENT_OPEN);
        for subject in &report.subjects {
            page.push_str(&self.render_section(subject));
        }
        page.push_str(DOC_TAIL);
        page
    }

    fn render_section(&self, subject: &Subject) -> String {
        let category = theme::subject_category(&subject.name);
        let columns = theme::column_classes(category);
        let cards: String = subject
            .cards
            .iter()
            .map(|card| self.render_card(card))
            .collect();
        format!(
            r##"            <div class="subject-section fade-in bg-white rounded-3xl p-8 shadow-xl shadow-slate-200/50 border border-slate-100" data-category="{category}">
                <div class="flex items-center gap-3 mb-6 border-b border-slate-100 pb-4">
                    <div class="w-3 h-8 bg-[#F4B733] rounded-full"></div>
                    <h2 class="text-2xl font-black text-slate-800">{name} 영역</h2>
                </div>
                <div class="grid grid-cols-1 {columns} gap-6">
{cards}                </div>
            </div>
"##,
            name = self.text(&subject.name),
        )
    }

    fn render_card(&self, card: &Card) -> String {
        let rows: String = card
            .grades
            .iter()
            .map(|row| self.render_grade_row(row))
            .collect();
        format!(
            r##"                    <div class="bg-slate-50 rounded-2xl p-6 border border-slate-100 hover:border-[#F4B733]/30 hover:shadow-lg hover:shadow-yellow-100/50 transition-all group">
                        <h3 class="text-lg font-black text-slate-900 mb-1 group-hover:text-[#d69e26] transition-colors">{title}</h3>
                        <div class="text-xs font-bold text-slate-400 mb-5 flex items-center gap-1">
                            <span class="w-1.5 h-1.5 rounded-full bg-slate-300"></span>
                            난이도: {difficulty}
                        </div>
                        <div class="space-y-3">
{rows}                        </div>
                    </div>
"##,
            title = self.text(&card.title),
            difficulty = self.text(&card.difficulty),
        )
    }

    fn render_grade_row(&self, row: &GradeRow) -> String {
        let desc = if row.desc.is_empty() {
            GRADE_PLACEHOLDER
        } else {
            row.desc.as_str()
        };
        format!(
            r##"                            <div class="flex items-center justify-between text-sm">
                                <div class="flex items-center gap-2">
                                    <span class="{badge}">{grade}</span>
                                    <span class="text-slate-500 font-medium">{desc}</span>
                                </div>
                                <span class="{value_class}">{value}</span>
                            </div>
"##,
            badge = theme::badge_classes(&row.grade),
            grade = self.text(&row.grade),
            desc = self.text(desc),
            value_class = theme::value_classes(&row.grade),
            value = self.text(&row.value),
        )
    }
}

/// Minimal HTML escaping for text interpolated into the template.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
