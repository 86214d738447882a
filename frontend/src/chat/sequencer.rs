//! Scripted replay of the hero chat.
//!
//! `schedule` turns the transcript into a table of timed transitions, and
//! `ChatSequencer` guards that the table is only ever handed out once.
//! The component owns the timers and feeds fired transitions back through
//! `ChatView::reduce`.

use std::rc::Rc;

use yew::Reducible;

use crate::chat::transcript::MessageDescriptor;
use crate::config::{CHAT_MESSAGE_SPACING_MS, CHAT_TYPING_FILE_MS, CHAT_TYPING_MS, CHAT_UPLOAD_MS};
use crate::motion::easing::stagger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTransition {
    ShowTyping,
    HideTyping,
    Reveal(usize),
    UploadComplete(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    /// Milliseconds after the run starts.
    pub at_ms: u32,
    pub transition: ChatTransition,
}

/// What started the run. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PageSettled,
    HeroVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    Running {
        pending: usize,
    },
    Finished,
}

/// Reveal delay of message `index`: its explicit override, else even spacing.
pub fn reveal_delay(index: usize, message: &MessageDescriptor) -> u32 {
    message
        .delay_ms
        .unwrap_or_else(|| stagger(index, CHAT_MESSAGE_SPACING_MS))
}

/// Builds the transition table for a whole run, ordered by time. Ties keep
/// authored order.
pub fn schedule(messages: &[MessageDescriptor]) -> Vec<ScheduledTransition> {
    let mut table = Vec::with_capacity(messages.len() * 3);
    let mut push = |at_ms, transition| table.push(ScheduledTransition { at_ms, transition });

    for (index, message) in messages.iter().enumerate() {
        let start = reveal_delay(index, message);

        let revealed_at = if message.is_developer() && index > 0 {
            let typing = if message.is_file() {
                CHAT_TYPING_FILE_MS
            } else {
                CHAT_TYPING_MS
            };
            push(start, ChatTransition::ShowTyping);
            let hidden_at = start.saturating_add(typing);
            push(hidden_at, ChatTransition::HideTyping);
            hidden_at
        } else {
            start
        };

        push(revealed_at, ChatTransition::Reveal(index));
        if message.is_file() {
            push(
                revealed_at.saturating_add(CHAT_UPLOAD_MS),
                ChatTransition::UploadComplete(index),
            );
        }
    }

    table.sort_by_key(|entry| entry.at_ms);
    table
}

/// One-shot latch around the transition table.
#[derive(Debug, Default)]
pub struct ChatSequencer {
    state: SequencerState,
}

impl ChatSequencer {
    /// Hands out the table for the single run. Returns `None` if a run has
    /// already started or there is nothing to play.
    pub fn start(&mut self, messages: &[MessageDescriptor]) -> Option<Vec<ScheduledTransition>> {
        if self.state != SequencerState::Idle || messages.is_empty() {
            return None;
        }
        let table = schedule(messages);
        self.state = SequencerState::Running {
            pending: table.len(),
        };
        Some(table)
    }

    /// Records that one scheduled transition fired.
    pub fn transition_fired(&mut self) {
        if let SequencerState::Running { pending } = self.state {
            self.state = if pending <= 1 {
                SequencerState::Finished
            } else {
                SequencerState::Running {
                    pending: pending - 1,
                }
            };
        }
    }

    pub fn has_started(&self) -> bool {
        self.state != SequencerState::Idle
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }
}

/// Rendered state of the chat: which bubbles are showing and whether the
/// typing indicator is up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatView {
    pub visible: Vec<bool>,
    pub uploaded: Vec<bool>,
    pub typing: bool,
}

impl ChatView {
    pub fn new(len: usize) -> Self {
        Self {
            visible: vec![false; len],
            uploaded: vec![false; len],
            typing: false,
        }
    }

    pub fn apply(&mut self, transition: ChatTransition) {
        match transition {
            ChatTransition::ShowTyping => self.typing = true,
            ChatTransition::HideTyping => self.typing = false,
            ChatTransition::Reveal(index) => {
                if let Some(slot) = self.visible.get_mut(index) {
                    *slot = true;
                }
            }
            ChatTransition::UploadComplete(index) => {
                if let Some(slot) = self.uploaded.get_mut(index) {
                    *slot = true;
                }
            }
        }
    }
}

impl Reducible for ChatView {
    type Action = ChatTransition;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
