use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Header() -> Html {
    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Contact} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-4 text-sm">
                        <a href="/support" class="text-neutral-600 dark:text-neutral-400 hover:text-neutral-900 dark:hover:text-white">
                            {"Support Chat"}
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}
