use std::collections::VecDeque;

use super::LineSource;
use crate::error::{AppError, Result};

/// Test source that replays scripted lines and failures in order
#[derive(Default)]
pub(crate) struct ScriptedSource {
    script: VecDeque<Result<String>>,
    discards: usize,
}

impl ScriptedSource {
    pub(crate) fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| Ok(l.into())).collect(),
            discards: 0,
        }
    }

    pub(crate) fn push_error(&mut self, message: &str) {
        self.script.push_back(Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            message.to_string(),
        ))));
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.script.push_back(Ok(line.to_string()));
    }

    pub(crate) fn discards(&self) -> usize {
        self.discards
    }
}

impl LineSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn discard_input(&mut self) -> Result<()> {
        self.discards += 1;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        // An exhausted script behaves like a read timeout
        self.script.pop_front().unwrap_or_else(|| Ok(String::new()))
    }
}
