// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(test)]
use std::collections::VecDeque;
use std::io::BufRead;
use std::io::StdinLock;
use std::io::Stdout;
use std::io::Write;

use crate::error::Fallible;
use crate::error::fail;

/// Something that yields one line of user input per request.
pub trait AnswerSource {
    /// Block until a line is available. Fails at end of input.
    fn next_answer(&mut self) -> Fallible<String>;
}

/// Something that displays lines of text.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> Fallible<()>;
}

/// Reads answers line by line.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AnswerSource for LineInput<R> {
    fn next_answer(&mut self) -> Fallible<String> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return fail("end of input.");
        }
        // Only the terminator is removed; the rest of the line is the answer.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

/// Writes one line per call and flushes, so prompts show up before the
/// program blocks on input.
pub struct LineOutput<W> {
    writer: W,
}

impl<W: Write> LineOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for LineOutput<W> {
    fn emit(&mut self, line: &str) -> Fallible<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// A line-oriented terminal. The halves are public so a review can borrow
/// both at once.
pub struct Console<R, W> {
    pub input: LineInput<R>,
    pub output: LineOutput<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            input: LineInput::new(reader),
            output: LineOutput::new(writer),
        }
    }

    /// Show a label and read the reply.
    pub fn prompt(&mut self, label: &str) -> Fallible<String> {
        self.output.emit(label)?;
        self.input.next_answer()
    }

    pub fn emit(&mut self, line: &str) -> Fallible<()> {
        self.output.emit(line)
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

/// Pre-recorded answers, handed out in order.
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

#[cfg(test)]
impl ScriptedAnswers {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self) -> Fallible<String> {
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => fail("end of input."),
        }
    }
}

#[cfg(test)]
impl OutputSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Fallible<()> {
        self.push(line.to_string());
        Ok(())
    }
}
