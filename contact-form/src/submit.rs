use std::future::Future;

use payloads::{APIClient, ClientError, requests::ContactMessage};

use crate::form::{FormAction, FormStore};
use crate::notify::{Notification, Notifier};

/// Delivers a contact message to the backend.
pub trait ContactSubmitter {
    fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ClientError>>;
}

impl ContactSubmitter for APIClient {
    fn send_contact(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ClientError>> {
        self.submit_contact(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// Another submission was still in flight; nothing was sent.
    AlreadySubmitting,
}

/// Returns the form to idle when dropped, so the submit button comes back on
/// every path out of [`submit_draft`].
struct SettleGuard<'a, St: FormStore + ?Sized> {
    store: &'a St,
}

impl<'a, St: FormStore + ?Sized> SettleGuard<'a, St> {
    fn begin(store: &'a St) -> Self {
        store.dispatch(FormAction::Begin);
        Self { store }
    }
}

impl<St: FormStore + ?Sized> Drop for SettleGuard<'_, St> {
    fn drop(&mut self) {
        self.store.dispatch(FormAction::Settle);
    }
}

/// Send the current draft.
///
/// On success the draft is cleared and a success notification shown. On any
/// failure the error is logged, a destructive notification shown, and the
/// draft kept so nothing has to be typed again.
#[tracing::instrument(skip_all, ret)]
pub async fn submit_draft<St, S, N>(
    store: &St,
    submitter: &S,
    notifier: &N,
) -> SubmitOutcome
where
    St: FormStore + ?Sized,
    S: ContactSubmitter + ?Sized,
    N: Notifier + ?Sized,
{
    let form = store.snapshot();
    if form.status.is_submitting() {
        tracing::debug!("submission already in flight");
        return SubmitOutcome::AlreadySubmitting;
    }

    let _settle = SettleGuard::begin(store);
    tracing::debug!("submitting contact message");

    match submitter.send_contact(&form.draft).await {
        Ok(()) => {
            notifier.notify(Notification::message_sent());
            store.dispatch(FormAction::Reset);
            SubmitOutcome::Sent
        }
        Err(e) => {
            tracing::error!("Failed to send contact message: {e:?}");
            notifier.notify(Notification::submission_failed());
            SubmitOutcome::Failed
        }
    }
}
