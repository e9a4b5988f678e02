use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
pub mod logs;
mod pages;

use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use pages::{ContactPage, NotFoundPage};

/// API client for the configured backend: `BACKEND_URL` at build time, or
/// else the page origin. `None` when neither is available.
pub fn get_api_client() -> Option<APIClient> {
    let address = backend_address(option_env!("BACKEND_URL"), || {
        web_sys::window()?.location().origin().ok()
    })?;

    Some(APIClient {
        address,
        inner_client: reqwest::Client::new(),
    })
}

fn backend_address(
    configured: Option<&str>,
    page_origin: impl FnOnce() -> Option<String>,
) -> Option<String> {
    configured.map(str::to_string).or_else(page_origin)
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Contact} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::backend_address;

    #[test]
    fn configured_backend_wins_over_page_origin() {
        let address = backend_address(Some("http://api.local"), || {
            panic!("origin should not be looked up")
        });
        assert_eq!(address.as_deref(), Some("http://api.local"));
    }

    #[test]
    fn falls_back_to_page_origin() {
        let address =
            backend_address(None, || Some("https://help.example.com".into()));
        assert_eq!(address.as_deref(), Some("https://help.example.com"));
    }

    #[test]
    fn no_address_without_configuration_or_origin() {
        assert_eq!(backend_address(None, || None), None);
    }
}
