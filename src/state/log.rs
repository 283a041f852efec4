//! Message Log
//!
//! Append-only record of the text received by one mounted log view.

/// An opaque text payload pushed by the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    /// Arrival time in milliseconds since the epoch (browser clock)
    received_at: i64,
}

impl Message {
    pub fn new(text: impl Into<String>, received_at: i64) -> Self {
        Self {
            text: text.into(),
            received_at,
        }
    }

    /// Stamp a payload with the current time
    pub fn received_now(text: impl Into<String>) -> Self {
        Self::new(text, chrono::Utc::now().timestamp_millis())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn received_at(&self) -> i64 {
        self.received_at
    }

    /// Arrival time as `HH:MM:SS` in the browser's local time zone
    pub fn received_label(&self) -> Option<String> {
        chrono::DateTime::from_timestamp_millis(self.received_at)
            .map(|dt| dt.with_timezone(&chrono::Local).format("%H:%M:%S").to_string())
    }
}

/// Messages in arrival order. Positions never change once assigned and
/// nothing is ever removed, reordered or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end, returning the message's position
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Message> {
        self.messages.get(position)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// Payload text of every message, in order
    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(Message::text).collect()
    }
}
