use contact_form::{
    ContactField, FormAction, FormStore, Notification, Notifier, submit_draft,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contexts::toast::use_toast;
use crate::get_api_client;
use crate::hooks::{ContactFormHandle, use_contact_form, use_title};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md
                           bg-white dark:bg-neutral-900 text-neutral-900 dark:text-white
                           focus:outline-none focus:ring-2 focus:ring-neutral-500";

fn on_field_input(
    form: &ContactFormHandle,
    field: ContactField,
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
        {
            input.value()
        } else {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            textarea.value()
        };
        form.dispatch(FormAction::Edit(field, value));
    })
}

#[function_component]
pub fn ContactPage() -> Html {
    use_title("Contact Us");
    let form = use_contact_form();
    let toast = use_toast();

    let onsubmit = {
        let form = form.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = form.clone();
            let toast = toast.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let Some(client) = get_api_client() else {
                    tracing::error!(
                        "Failed to send contact message: no backend address"
                    );
                    toast.notify(Notification::submission_failed());
                    return;
                };
                submit_draft(&form, &client, &toast).await;
            });
        })
    };

    let state = form.form();
    let submitting = state.status.is_submitting();

    html! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div>
                <h1 class="text-4xl md:text-5xl font-bold text-neutral-900 dark:text-white mb-4" data-testid="contact-page-title">
                    {"Contact Us"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400" data-testid="contact-page-description">
                    {"Have questions or feedback? We'd love to hear from you"}
                </p>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                <div class="space-y-4">
                    <div class="bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6" data-testid="contact-support-card">
                        <h3 class="text-lg font-semibold text-neutral-900 dark:text-white mb-2" data-testid="contact-support-title">
                            {"Chat Support"}
                        </h3>
                        <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-3" data-testid="contact-support-description">
                            {"Get instant help from our AI-powered support assistant"}
                        </p>
                        <a
                            href="/support"
                            data-testid="button-support-chat"
                            class="inline-block px-3 py-1.5 text-sm border border-neutral-300 dark:border-neutral-600 rounded-md
                                   text-neutral-900 dark:text-white hover:bg-neutral-100 dark:hover:bg-neutral-700"
                        >
                            {"Open Support Chat"}
                        </a>
                    </div>
                </div>

                <form
                    onsubmit={onsubmit}
                    data-testid="contact-form"
                    class="md:col-span-2 bg-white dark:bg-neutral-800 border border-neutral-200 dark:border-neutral-700 rounded-lg p-6 space-y-4"
                >
                    <h2 class="text-xl font-semibold text-neutral-900 dark:text-white">
                        {"Send us a message"}
                    </h2>

                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label for="name" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Name"}
                            </label>
                            <input
                                type="text"
                                id="name"
                                required={true}
                                placeholder="Your name"
                                data-testid="input-name"
                                value={state.draft.name.clone()}
                                oninput={on_field_input(&form, ContactField::Name)}
                                class={INPUT_CLASS}
                            />
                        </div>
                        <div>
                            <label for="email" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                                {"Email"}
                            </label>
                            <input
                                type="email"
                                id="email"
                                required={true}
                                placeholder="you@example.com"
                                data-testid="input-email"
                                value={state.draft.email.clone()}
                                oninput={on_field_input(&form, ContactField::Email)}
                                class={INPUT_CLASS}
                            />
                        </div>
                    </div>

                    <div>
                        <label for="subject" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Subject"}
                        </label>
                        <input
                            type="text"
                            id="subject"
                            required={true}
                            placeholder="What is this about?"
                            data-testid="input-subject"
                            value={state.draft.subject.clone()}
                            oninput={on_field_input(&form, ContactField::Subject)}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <div>
                        <label for="message" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Message"}
                        </label>
                        <textarea
                            id="message"
                            required={true}
                            rows="6"
                            placeholder="Tell us more..."
                            data-testid="input-message"
                            value={state.draft.message.clone()}
                            oninput={on_field_input(&form, ContactField::Message)}
                            class={INPUT_CLASS}
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={submitting}
                        data-testid="button-submit-contact"
                        class="w-full bg-neutral-900 dark:bg-white text-white dark:text-neutral-900
                               px-4 py-2 rounded-md hover:bg-neutral-800 dark:hover:bg-neutral-100
                               disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {state.submit_label()}
                    </button>
                </form>
            </div>
        </div>
    }
}
