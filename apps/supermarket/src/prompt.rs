//! Interactive stop prompt shown after every interval.

use std::io::{self, BufRead, Write};

use checkout_sim::{IntervalSummary, StopSignal};

pub const QUESTION: &str = "Do you want to end the simulation? (y/n): ";

/// Asks on `output` whether to end the run and reads one answer line from
/// `input`.  `y` / `yes` (any case) stops; end of input also stops, so a
/// closed stdin never spins forever.
pub struct PromptStop<R, W> {
    input:  R,
    output: W,
}

impl PromptStop<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptStop<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{QUESTION}")?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }
}

impl<R: BufRead, W: Write> StopSignal for PromptStop<R, W> {
    fn should_stop(&mut self, _completed: &IntervalSummary) -> bool {
        match self.ask() {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => {
                log::info!("stdin closed, ending simulation");
                true
            }
            Err(e) => {
                log::error!("stop prompt failed: {e}");
                true
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
