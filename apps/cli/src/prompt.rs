//! Reading answers from the interactive input.

use std::io::BufRead;

use quiz_core::{AnswerSource, Question};

/// Blocking line-oriented answer source over any buffered reader,
/// so the live terminal and scripted test input drive the session
/// runner identically.
pub struct LineAnswerSource<R> {
    reader: R,
}

impl<R: BufRead> LineAnswerSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AnswerSource for LineAnswerSource<R> {
    fn read_answer(&mut self, _question: &Question) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn question() -> Question {
        Question {
            text: "q".to_string(),
            category: "A".to_string(),
            options: vec!["x".to_string(), "y".to_string()],
            correct: vec![0],
            help: None,
        }
    }

    #[test]
    fn reads_trimmed_lines_until_exhausted() {
        let mut source = LineAnswerSource::new(Cursor::new("0\n 1,0 \n"));
        let q = question();

        assert_eq!(source.read_answer(&q), Some("0".to_string()));
        assert_eq!(source.read_answer(&q), Some("1,0".to_string()));
        assert_eq!(source.read_answer(&q), None);
    }

    #[test]
    fn empty_line_is_an_empty_reply() {
        let mut source = LineAnswerSource::new(Cursor::new("\n"));
        assert_eq!(source.read_answer(&question()), Some(String::new()));
    }
}
