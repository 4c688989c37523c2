//! Deterministic console that replays queued input and records frames.

use std::collections::VecDeque;

use crate::error::{MenuError, MenuResult};
use crate::menu::Key;

use super::console::{DisplaySink, KeySource, QueryPrompt};

/// Console fed from queues instead of a terminal.
///
/// Every `clear()` starts a new frame. Running out of keys or queries is an
/// [`MenuError::InputExhausted`] error rather than a hang.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    keys: VecDeque<Key>,
    queries: VecDeque<String>,
    frames: Vec<Vec<String>>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue answers for search prompts, consumed in order
    pub fn with_queries<S: Into<String>>(mut self, queries: impl IntoIterator<Item = S>) -> Self {
        self.queries.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(key);
    }

    /// Every frame drawn so far
    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Prompts shown for search queries
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedConsole {
    fn read_key(&mut self) -> MenuResult<Key> {
        self.keys.pop_front().ok_or(MenuError::InputExhausted("keys"))
    }
}

impl DisplaySink for ScriptedConsole {
    fn clear(&mut self) -> MenuResult<()> {
        self.frames.push(Vec::new());
        Ok(())
    }

    fn print_line(&mut self, text: &str) -> MenuResult<()> {
        match self.frames.last_mut() {
            Some(frame) => frame.push(text.to_string()),
            None => self.frames.push(vec![text.to_string()]),
        }
        Ok(())
    }
}

impl QueryPrompt for ScriptedConsole {
    fn read_query(&mut self, prompt: &str) -> MenuResult<String> {
        self.prompts.push(prompt.to_string());
        self.queries
            .pop_front()
            .ok_or(MenuError::InputExhausted("queries"))
    }
}
