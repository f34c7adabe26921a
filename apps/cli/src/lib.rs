//! Interactive terminal front-end over the quiz-core session engine.

pub mod cli;
pub mod data;
pub mod prompt;
pub mod render;

use std::io::{self, BufRead, Write};

use quiz_core::{select, summarize, SelectionCriteria, SessionRunner};

use crate::cli::Args;
use crate::prompt::LineAnswerSource;
use crate::render::TermRenderer;

/// Run one invocation against the live terminal.
pub fn run(args: Args) -> anyhow::Result<()> {
    let stdin = io::stdin();
    execute(args, stdin.lock(), io::stdout())
}

/// Run one invocation against arbitrary input/output streams. Errors
/// bubble up to `main`, which reports them and exits non-zero.
pub fn execute<R: BufRead, W: Write>(args: Args, input: R, out: W) -> anyhow::Result<()> {
    let repository = data::load_repository(&args.data)?;
    let mut renderer = TermRenderer::new(out);

    if args.list {
        renderer.categories(&repository.categories());
        return Ok(());
    }

    let criteria = SelectionCriteria {
        categories: args.categories,
        count: args.number,
        hide_multiple_choice: args.hide_multiple_choice,
        training: args.training,
    };
    let training = criteria.training;

    let pool = repository.questions_in(&criteria.categories)?;
    let selected = select(pool, criteria.count)?;
    tracing::debug!(selected = selected.len(), "session starting");

    renderer.banner(selected.len());

    let mut runner = SessionRunner::new(criteria, selected);
    let mut source = LineAnswerSource::new(input);
    let report = summarize(runner.run(&mut source, &mut renderer)?);

    renderer.report(&report, training);
    Ok(())
}
