use std::collections::VecDeque;

/// Oldest log lines are dropped past this count.
pub const MAX_LOG_LINES: usize = 500;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// A decode has been requested and not yet answered.
    pub busy: bool,

    pub show_magnifier: bool,
    pub show_about: bool,

    /// Log messages, oldest first.
    pub log_messages: VecDeque<String>,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn add_log(&mut self, msg: String) {
        if self.log_messages.len() >= MAX_LOG_LINES {
            self.log_messages.pop_front();
        }
        self.log_messages.push_back(msg);
    }
}
