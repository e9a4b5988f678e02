use std::cell::RefCell;
use std::rc::Rc;

use payloads::requests::{ContactField, ContactMessage};

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Everything the contact page keeps between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactMessage,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Replace one field of the draft.
    Edit(ContactField, String),
    /// A submission started.
    Begin,
    /// Clear the draft after a confirmed send.
    Reset,
    /// The submission settled, whatever its outcome.
    Settle,
}

impl ContactForm {
    pub fn reduce(&self, action: FormAction) -> Self {
        match action {
            FormAction::Edit(field, value) => Self {
                draft: self.draft.with_field(field, value),
                status: self.status,
            },
            FormAction::Begin => Self {
                draft: self.draft.clone(),
                status: SubmissionStatus::Submitting,
            },
            FormAction::Reset => Self {
                draft: ContactMessage::default(),
                status: self.status,
            },
            FormAction::Settle => Self {
                draft: self.draft.clone(),
                status: SubmissionStatus::Idle,
            },
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

/// Owner of the form state. `snapshot` reflects every action dispatched
/// before it.
pub trait FormStore {
    fn snapshot(&self) -> ContactForm;
    fn dispatch(&self, action: FormAction);
}

impl FormStore for RefCell<ContactForm> {
    fn snapshot(&self) -> ContactForm {
        self.borrow().clone()
    }

    fn dispatch(&self, action: FormAction) {
        let next = self.borrow().reduce(action);
        *self.borrow_mut() = next;
    }
}

/// A [`FormStore`] in front of a store whose own view lags behind, such as a
/// UI reducer that only applies actions on the next render.
///
/// Every action is applied to a shared copy before it is forwarded, so all
/// clones see a submission that is already in flight, even clones captured
/// by a render that predates it.
#[derive(Clone)]
pub struct MirroredStore {
    latest: Rc<RefCell<ContactForm>>,
    forward: Rc<dyn Fn(FormAction)>,
}

impl MirroredStore {
    pub fn new(
        latest: Rc<RefCell<ContactForm>>,
        forward: impl Fn(FormAction) + 'static,
    ) -> Self {
        Self {
            latest,
            forward: Rc::new(forward),
        }
    }
}

impl FormStore for MirroredStore {
    fn snapshot(&self) -> ContactForm {
        self.latest.snapshot()
    }

    fn dispatch(&self, action: FormAction) {
        self.latest.dispatch(action.clone());
        (self.forward)(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_only_touch_their_field() {
        let store = RefCell::new(ContactForm::default());
        store.dispatch(FormAction::Edit(ContactField::Name, "Ada".into()));
        store.dispatch(FormAction::Edit(ContactField::Subject, "Bug".into()));
        store.dispatch(FormAction::Edit(ContactField::Name, "Grace".into()));

        let form = store.snapshot();
        assert_eq!(form.draft.name, "Grace");
        assert_eq!(form.draft.subject, "Bug");
        assert_eq!(form.draft.email, "");
        assert_eq!(form.draft.message, "");
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn begin_and_settle_toggle_status_and_keep_draft() {
        let form = ContactForm::default()
            .reduce(FormAction::Edit(ContactField::Message, "hi".into()));
        let submitting = form.reduce(FormAction::Begin);
        assert!(submitting.status.is_submitting());
        assert_eq!(submitting.submit_label(), "Sending...");
        assert_eq!(submitting.draft, form.draft);

        let settled = submitting.reduce(FormAction::Settle);
        assert_eq!(settled.status, SubmissionStatus::Idle);
        assert_eq!(settled.submit_label(), "Send Message");
        assert_eq!(settled.draft, form.draft);
    }

    #[test]
    fn reset_clears_draft_but_not_status() {
        let form = ContactForm::default()
            .reduce(FormAction::Edit(ContactField::Email, "a@b.c".into()))
            .reduce(FormAction::Begin)
            .reduce(FormAction::Reset);
        assert!(form.draft.is_empty());
        assert!(form.status.is_submitting());
    }

    #[test]
    fn mirrored_store_is_current_before_forwarded_state_catches_up() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let store = MirroredStore::new(Rc::default(), {
            let forwarded = forwarded.clone();
            move |action| forwarded.borrow_mut().push(action)
        });
        let earlier_clone = store.clone();

        store.dispatch(FormAction::Edit(ContactField::Name, "Ada".into()));
        store.dispatch(FormAction::Begin);

        let seen = earlier_clone.snapshot();
        assert!(seen.status.is_submitting());
        assert_eq!(seen.draft.name, "Ada");
        assert_eq!(
            *forwarded.borrow(),
            vec![
                FormAction::Edit(ContactField::Name, "Ada".into()),
                FormAction::Begin
            ]
        );
    }

    #[test]
    fn settle_when_idle_is_a_no_op() {
        let form = ContactForm::default();
        assert_eq!(form.reduce(FormAction::Settle), form);
    }
}
