//! Plan-to-document rendering.
//!
//! Pure transform from a [`Plan`] into a paginated sequence of positioned
//! text draws. No I/O happens here; encoding the result to PDF bytes lives
//! in [`crate::pdf`].

use crate::models::{Day, Plan, Targets, TextOrNumber};

/// A4 page width in points.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 page height in points.
pub const PAGE_HEIGHT: f32 = 842.0;
/// Left margin for all text.
pub const MARGIN_X: f32 = 50.0;
/// Vertical start offset on every page.
pub const TOP_Y: f32 = 800.0;
/// Bottom threshold; a line may never be placed below this.
pub const BOTTOM_Y: f32 = 60.0;
/// Extra left inset for exercise instruction lines.
const INDENT: f32 = 12.0;

const TITLE_SIZE: f32 = 18.0;
const TITLE_GAP: f32 = 12.0;
const GREETING_SIZE: f32 = 14.0;
const GREETING_GAP: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const BODY_GAP: f32 = 10.0;
const SCHEDULE_GAP: f32 = 8.0;

/// RGB fill color, each channel in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

/// One positioned text draw instruction.
#[derive(Debug, Clone)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// One rendered page.
#[derive(Debug, Default)]
pub struct Page {
    pub draws: Vec<TextDraw>,
}

/// A rendered document: ordered pages of ordered draws.
#[derive(Debug, Default)]
pub struct Document {
    pub pages: Vec<Page>,
}

/// Renderer position: page index plus vertical offset.
///
/// Pagination is a transition on this value: placing a line first breaks to
/// a fresh page if the offset has fallen below [`BOTTOM_Y`], then advancing
/// drops the offset by `size + gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCursor {
    pub page: usize,
    pub y: f32,
}

impl RenderCursor {
    fn start() -> Self {
        Self { page: 0, y: TOP_Y }
    }

    /// Cursor position at which the next line actually lands.
    fn placed(self) -> Self {
        if self.y < BOTTOM_Y {
            Self {
                page: self.page + 1,
                y: TOP_Y,
            }
        } else {
            self
        }
    }

    /// Cursor after a line of the given size and gap has been emitted.
    fn advanced(self, size: f32, gap: f32) -> Self {
        Self {
            page: self.page,
            y: self.y - (size + gap),
        }
    }
}

struct DocumentBuilder {
    pages: Vec<Page>,
    cursor: RenderCursor,
}

impl DocumentBuilder {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor: RenderCursor::start(),
        }
    }

    /// Emit a single line at the cursor, breaking the page first if needed.
    fn line(&mut self, text: impl Into<String>, x: f32, size: f32, gap: f32) {
        let at = self.cursor.placed();
        while self.pages.len() <= at.page {
            self.pages.push(Page::default());
        }
        self.pages[at.page].draws.push(TextDraw {
            text: text.into(),
            x,
            y: at.y,
            size,
            color: BLACK,
        });
        self.cursor = at.advanced(size, gap);
    }

    /// Emit a possibly multi-line value, one draw per source line.
    fn block(&mut self, text: &str, x: f32, size: f32, gap: f32) {
        for line in text.split('\n') {
            self.line(line, x, size, gap);
        }
    }

    fn finish(self) -> Document {
        Document { pages: self.pages }
    }
}

/// Plan sections in their fixed output order.
enum Section<'a> {
    Text(&'static str, Option<&'a str>),
    Schedule(Option<&'a [Day]>),
    Targets(Option<&'a Targets>),
}

/// Render a plan into a paginated document.
///
/// Absent sections are skipped entirely; a missing display name falls back
/// to a generic greeting.
pub fn render(plan: &Plan, display_name: Option<&str>) -> Document {
    let mut doc = DocumentBuilder::new();

    doc.line(
        "Your 30-Day Personalized Fitness Plan",
        MARGIN_X,
        TITLE_SIZE,
        TITLE_GAP,
    );
    let name = display_name.unwrap_or("there");
    doc.line(
        format!("Hi {}, here's your full program:", name),
        MARGIN_X,
        GREETING_SIZE,
        GREETING_GAP,
    );

    let sections = [
        Section::Text("Summary:", plan.summary.as_deref()),
        Section::Text("Warm-up:", plan.warmup.as_deref()),
        Section::Schedule(plan.schedule.as_deref()),
        Section::Text("Cardio:", plan.cardio.as_deref()),
        Section::Text("Cool-down:", plan.cooldown.as_deref()),
        Section::Text("Notes:", plan.notes.as_deref()),
        Section::Targets(plan.targets.as_ref()),
    ];

    for section in sections {
        match section {
            Section::Text(heading, Some(content)) => {
                doc.line(heading, MARGIN_X, BODY_SIZE, BODY_GAP);
                doc.block(content, MARGIN_X, BODY_SIZE, BODY_GAP);
            }
            Section::Schedule(Some(days)) => render_schedule(&mut doc, days),
            Section::Targets(Some(targets)) => render_targets(&mut doc, targets),
            _ => {}
        }
    }

    doc.finish()
}

fn render_schedule(doc: &mut DocumentBuilder, days: &[Day]) {
    for (i, day) in days.iter().enumerate() {
        doc.line(
            format!("Day {}: {}", i + 1, day.title),
            MARGIN_X,
            BODY_SIZE,
            SCHEDULE_GAP,
        );
        for exercise in &day.exercises {
            let mut line = format!(
                "- {}: {} x {}",
                exercise.name,
                opt_value(&exercise.sets),
                opt_value(&exercise.reps)
            );
            if let Some(time) = &exercise.time {
                line.push_str(&format!(" ({})", time));
            }
            doc.line(line, MARGIN_X, BODY_SIZE, SCHEDULE_GAP);
            if let Some(how_to) = &exercise.how_to {
                doc.block(how_to, MARGIN_X + INDENT, BODY_SIZE, SCHEDULE_GAP);
            }
        }
    }
}

fn render_targets(doc: &mut DocumentBuilder, targets: &Targets) {
    doc.line("Targets:", MARGIN_X, BODY_SIZE, BODY_GAP);
    let entries = [
        ("Calories", targets.calories),
        ("Protein", targets.protein),
        ("Steps", targets.steps),
    ];
    for (label, value) in entries {
        if let Some(value) = value {
            doc.line(
                format!("{}: {}", label, TextOrNumber::Number(value)),
                MARGIN_X,
                BODY_SIZE,
                BODY_GAP,
            );
        }
    }
}

/// Absent set/rep counts render as empty strings, never as "0" or "null".
fn opt_value(value: &Option<TextOrNumber>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exercise;

    fn texts(doc: &Document) -> Vec<&str> {
        doc.pages
            .iter()
            .flat_map(|p| p.draws.iter().map(|d| d.text.as_str()))
            .collect()
    }

    fn exercise(name: &str) -> Exercise {
        Exercise {
            name: name.to_string(),
            sets: Some(TextOrNumber::Number(3.0)),
            reps: Some(TextOrNumber::Text("8-12".to_string())),
            time: None,
            how_to: None,
        }
    }

    #[test]
    fn test_empty_plan_renders_title_and_greeting_only() {
        let doc = render(&Plan::default(), None);
        assert_eq!(doc.pages.len(), 1);
        let lines = texts(&doc);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Your 30-Day Personalized Fitness Plan");
        assert_eq!(lines[1], "Hi there, here's your full program:");
    }

    #[test]
    fn test_greeting_uses_display_name() {
        let doc = render(&Plan::default(), Some("Sam"));
        assert_eq!(texts(&doc)[1], "Hi Sam, here's your full program:");
    }

    #[test]
    fn test_greeting_never_renders_absence_marker() {
        let doc = render(&Plan::default(), None);
        let greeting = texts(&doc)[1].to_string();
        assert!(greeting.contains("there"));
        assert!(!greeting.contains("undefined"));
        assert!(!greeting.contains("null"));
    }

    #[test]
    fn test_summary_section() {
        let plan = Plan {
            summary: Some("Lose fat".to_string()),
            ..Plan::default()
        };
        let lines = texts(&render(&plan, None))
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert_eq!(lines[2], "Summary:");
        assert_eq!(lines[3], "Lose fat");
    }

    #[test]
    fn test_multiline_field_emits_one_draw_per_line() {
        let plan = Plan {
            notes: Some("eat well\nsleep more\nhydrate".to_string()),
            ..Plan::default()
        };
        let doc = render(&plan, None);
        let lines = texts(&doc);
        let start = lines.iter().position(|l| *l == "Notes:").unwrap();
        assert_eq!(&lines[start + 1..start + 4], &["eat well", "sleep more", "hydrate"]);
    }

    #[test]
    fn test_schedule_expansion_counts_and_order() {
        let plan = Plan {
            cardio: Some("20 min incline walk".to_string()),
            schedule: Some(vec![
                Day {
                    title: "Push".to_string(),
                    exercises: vec![exercise("Bench"), exercise("Dips")],
                },
                Day {
                    title: "Pull".to_string(),
                    exercises: vec![exercise("Rows"), exercise("Curls"), exercise("Face pulls")],
                },
            ]),
            ..Plan::default()
        };
        let doc = render(&plan, None);
        let lines = texts(&doc);

        let day_lines: Vec<_> = lines.iter().filter(|l| l.starts_with("Day ")).collect();
        let exercise_lines: Vec<_> = lines.iter().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(day_lines.len(), 2);
        assert_eq!(exercise_lines.len(), 5);

        // Day-then-exercise order, all before the following Cardio section.
        let day1 = lines.iter().position(|l| *l == "Day 1: Push").unwrap();
        let day2 = lines.iter().position(|l| *l == "Day 2: Pull").unwrap();
        let bench = lines.iter().position(|l| *l == "- Bench: 3 x 8-12").unwrap();
        let cardio = lines.iter().position(|l| *l == "Cardio:").unwrap();
        assert!(day1 < bench && bench < day2);
        assert!(day2 < cardio);
    }

    #[test]
    fn test_exercise_line_formatting() {
        let plan = Plan {
            schedule: Some(vec![Day {
                title: "Legs".to_string(),
                exercises: vec![Exercise {
                    name: "Plank".to_string(),
                    sets: None,
                    reps: None,
                    time: Some("45s".to_string()),
                    how_to: Some("brace your core\nkeep hips level".to_string()),
                }],
            }]),
            ..Plan::default()
        };
        let doc = render(&plan, None);
        let lines = texts(&doc);
        assert!(lines.contains(&"- Plank:  x  (45s)"));

        // Instruction lines sit indented beneath the exercise.
        let indented: Vec<_> = doc.pages[0]
            .draws
            .iter()
            .filter(|d| d.x > MARGIN_X)
            .map(|d| d.text.as_str())
            .collect();
        assert_eq!(indented, vec!["brace your core", "keep hips level"]);
    }

    #[test]
    fn test_targets_section_skips_absent_values() {
        let plan = Plan {
            targets: Some(Targets {
                calories: Some(1800.0),
                protein: None,
                steps: Some(10000.0),
            }),
            ..Plan::default()
        };
        let lines = texts(&render(&plan, None))
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        let start = lines.iter().position(|l| l == "Targets:").unwrap();
        assert_eq!(lines[start + 1], "Calories: 1800");
        assert_eq!(lines[start + 2], "Steps: 10000");
        assert!(!lines.iter().any(|l| l.starts_with("Protein")));
    }

    #[test]
    fn test_pagination_breaks_to_second_page() {
        // Title (18+12) and greeting (14+16) leave the first body line at
        // y = 740; body lines advance 22pt each, so the "Notes:" heading plus
        // 30 note lines fit on page one and note line 31 tops page two.
        let notes = (1..=40)
            .map(|i| format!("line{}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let plan = Plan {
            notes: Some(notes),
            ..Plan::default()
        };
        let doc = render(&plan, None);
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[1].draws[0].text, "line31");
        assert_eq!(doc.pages[1].draws[0].y, TOP_Y);
    }

    #[test]
    fn test_no_draw_below_bottom_threshold() {
        let notes = (0..200).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let plan = Plan {
            notes: Some(notes),
            ..Plan::default()
        };
        let doc = render(&plan, None);
        assert!(doc.pages.len() > 2);
        for page in &doc.pages {
            assert!(!page.draws.is_empty());
            for draw in &page.draws {
                assert!(draw.y >= BOTTOM_Y, "draw below bottom margin: {}", draw.y);
                assert!(draw.y <= TOP_Y);
            }
        }
    }
}
