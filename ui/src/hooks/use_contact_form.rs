use std::rc::Rc;

use contact_form::{ContactForm, FormAction, FormStore, MirroredStore};
use yew::prelude::*;

#[derive(Debug, Default, PartialEq)]
pub struct ContactFormState(pub ContactForm);

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

/// Form state for the contact page.
///
/// Rendering reads the reducer; the submit workflow goes through a
/// [`MirroredStore`] that forwards to the reducer, so a submit task spawned
/// from a stale render still sees a submission that is already in flight.
#[derive(Clone)]
pub struct ContactFormHandle {
    state: UseReducerHandle<ContactFormState>,
    store: MirroredStore,
}

impl ContactFormHandle {
    pub fn form(&self) -> &ContactForm {
        &self.state.0
    }
}

impl FormStore for ContactFormHandle {
    fn snapshot(&self) -> ContactForm {
        self.store.snapshot()
    }

    fn dispatch(&self, action: FormAction) {
        self.store.dispatch(action);
    }
}

#[hook]
pub fn use_contact_form() -> ContactFormHandle {
    let state = use_reducer(ContactFormState::default);
    let latest = use_mut_ref(ContactForm::default);
    let dispatcher = state.dispatcher();
    let store = MirroredStore::new(latest, move |action| {
        dispatcher.dispatch(action)
    });
    ContactFormHandle { state, store }
}
