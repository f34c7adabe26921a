//! Terminal rendering of questions, feedback and the summary table.
//!
//! The core hands over plain structured data; everything visual
//! lives here.

use std::io::Write;

use quiz_core::{Question, QuestionResult, SessionObserver, SessionReport};

const CHECK: &str = "\u{2714}";
const CROSS: &str = "\u{2718}";

/// Writes session output to any `Write` sink (stdout in production,
/// a buffer in tests). Write failures on the terminal are ignored;
/// there is nowhere left to report them.
pub struct TermRenderer<W> {
    out: W,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, count: usize) {
        let _ = writeln!(self.out, "Starting a new set of {count} questions");
        let _ = writeln!(self.out);
    }

    pub fn categories(&mut self, categories: &[&str]) {
        for category in categories {
            let _ = writeln!(self.out, "{category}");
        }
    }

    /// Render the end-of-session table plus the aggregate counts.
    /// Help cells stay empty in training mode, where the help was
    /// already shown right after the wrong answer.
    pub fn report(&mut self, report: &SessionReport, training: bool) {
        let headers = ["Question", "Correct answer", "Result", "Help"];
        let rows: Vec<[String; 4]> = report
            .rows
            .iter()
            .map(|row| {
                [
                    row.question.clone(),
                    row.correct_answers.join(", "),
                    if row.correct { CHECK } else { CROSS }.to_string(),
                    if training {
                        String::new()
                    } else {
                        row.help.clone().unwrap_or_default()
                    },
                ]
            })
            .collect();

        let mut widths: [usize; 4] = headers.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        self.table_rule(&widths);
        self.table_row(&widths, &headers.map(str::to_string));
        self.table_rule(&widths);
        for row in &rows {
            self.table_row(&widths, row);
        }
        self.table_rule(&widths);

        let _ = writeln!(
            self.out,
            "You answered {} of {} questions correctly.",
            report.correct, report.total
        );
    }

    fn table_rule(&mut self, widths: &[usize; 4]) {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        let _ = writeln!(self.out, "{line}");
    }

    fn table_row(&mut self, widths: &[usize; 4], cells: &[String; 4]) {
        let mut line = String::from("|");
        for (width, cell) in widths.iter().zip(cells.iter()) {
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        let _ = writeln!(self.out, "{line}");
    }
}

impl<W: Write> SessionObserver for TermRenderer<W> {
    fn question_presented(
        &mut self,
        number: usize,
        total: usize,
        question: &Question,
        announce_choice_kind: bool,
    ) {
        let _ = writeln!(
            self.out,
            "Question {number}/{total} [{}] {}",
            question.category, question.text
        );
        if announce_choice_kind {
            let kind = if question.is_multiple_choice() {
                "IS"
            } else {
                "IS NOT"
            };
            let _ = writeln!(self.out, "This question {kind} multiple choice.");
        }
        for (index, option) in question.options.iter().enumerate() {
            let _ = writeln!(self.out, "  [{index}] {option}");
        }
        let _ = write!(self.out, "> ");
        let _ = self.out.flush();
    }

    fn feedback(&mut self, result: &QuestionResult) {
        if result.correct {
            let _ = writeln!(self.out, "{CHECK} Correct");
        } else {
            let _ = writeln!(self.out, "{CROSS} Wrong");
            if let Some(help) = &result.question.help {
                let _ = writeln!(self.out, "Help: {help}");
            }
        }
        let _ = writeln!(self.out);
    }
}
