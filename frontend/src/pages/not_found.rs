use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <h1 class="text-2xl sm:text-3xl font-bold text-gray-800">"404 - Page Not Found"</h1>
            <p class="mt-2 text-sm text-gray-500">"The page you are looking for does not exist."</p>
        </div>
    }
}
