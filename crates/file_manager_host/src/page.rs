//! Page-level host contracts: blocking dialogs and location changes.

use std::{cell::RefCell, collections::VecDeque};

/// Host service for the browser page the directory view runs in.
///
/// Dialogs are blocking, matching `window.alert` / `window.prompt`.
pub trait PageHost {
    /// Shows a blocking message.
    fn alert(&self, message: &str);

    /// Asks for a line of text. `None` means the user cancelled.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;

    /// Reloads the whole page.
    fn reload(&self);

    /// Navigates to `href`, relative to the current location.
    fn navigate(&self, href: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Interaction recorded by [`MemoryPageHost`].
pub enum PageEvent {
    /// An alert was shown.
    Alert(String),
    /// A prompt was shown with the given message and default.
    Prompt {
        /// Prompt message.
        message: String,
        /// Pre-filled value.
        default: String,
    },
    /// The page reloaded.
    Reload,
    /// The page navigated.
    Navigate(String),
}

#[derive(Debug, Default)]
/// Page host that records events and answers prompts from a script.
pub struct MemoryPageHost {
    answers: RefCell<VecDeque<Option<String>>>,
    events: RefCell<Vec<PageEvent>>,
}

impl MemoryPageHost {
    /// Queues prompt answers, consumed in order. Unscripted prompts are cancelled.
    pub fn with_answers<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            events: RefCell::new(Vec::new()),
        }
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    /// Number of reloads recorded so far.
    pub fn reload_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, PageEvent::Reload))
            .count()
    }
}

impl PageHost for MemoryPageHost {
    fn alert(&self, message: &str) {
        self.events
            .borrow_mut()
            .push(PageEvent::Alert(message.to_string()));
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        self.events.borrow_mut().push(PageEvent::Prompt {
            message: message.to_string(),
            default: default.to_string(),
        });
        self.answers.borrow_mut().pop_front().flatten()
    }

    fn reload(&self) {
        self.events.borrow_mut().push(PageEvent::Reload);
    }

    fn navigate(&self, href: &str) {
        self.events
            .borrow_mut()
            .push(PageEvent::Navigate(href.to_string()));
    }
}
