use super::message::Message;

/// A structured prompt containing a sequence of messages.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    /// Create a new empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompt with a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(content)],
        }
    }

    /// Create a prompt with a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
        }
    }

    /// Add a system message.
    pub fn with_system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Add a user message.
    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Add an assistant message.
    pub fn with_assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Add a message.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Get the messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consume the prompt, returning the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::user(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::user(s)
    }
}

impl From<Message> for Prompt {
    fn from(message: Message) -> Self {
        Prompt {
            messages: vec![message],
        }
    }
}

impl From<Vec<Message>> for Prompt {
    fn from(messages: Vec<Message>) -> Self {
        Prompt { messages }
    }
}
