/// A raw commit message split into header and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
}

impl CommitMessage {
    /// Wrap raw commit message text
    pub fn new(raw: impl Into<String>) -> Self {
        CommitMessage { raw: raw.into() }
    }

    /// The full message text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Text before the first newline
    pub fn header(&self) -> &str {
        self.raw
            .split_once('\n')
            .map_or(self.raw.as_str(), |(header, _)| header)
    }

    /// Text after the first newline, if any
    pub fn body(&self) -> Option<&str> {
        self.raw.split_once('\n').map(|(_, body)| body)
    }
}

impl From<&str> for CommitMessage {
    fn from(raw: &str) -> Self {
        CommitMessage::new(raw)
    }
}

impl From<String> for CommitMessage {
    fn from(raw: String) -> Self {
        CommitMessage::new(raw)
    }
}
