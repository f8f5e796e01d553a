/// The feedback overlay. Holds at most one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    message: Option<String>,
}

impl Notification {
    /// Shows `message`, replacing whatever was visible.
    /// Returns true if a message was already showing.
    pub fn show(&mut self, message: &str) -> bool {
        self.message.replace(message.to_string()).is_some()
    }

    /// Returns true if something was dismissed.
    pub fn hide(&mut self) -> bool {
        self.message.take().is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
