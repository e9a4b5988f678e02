/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = Variant::Destructive;
        self
    }

    pub fn message_sent() -> Self {
        Self::new("Message sent!", "We'll get back to you as soon as possible.")
    }

    pub fn submission_failed() -> Self {
        Self::new("Error", "Failed to send message. Please try again.")
            .destructive()
    }
}

/// Somewhere to show transient notifications. How long they stay visible is
/// up to the implementation.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
