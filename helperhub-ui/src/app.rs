//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{DetailPopup, LoginPrompt, Nav, Toast};
use crate::pages::{
    About, AdminEdit, AuthCallback, Catalogue, Contact, Faqs, Home, Login, Services, Showcase,
};
use crate::state::{provide_auth, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_auth();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-800 flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/about" view=About />
                        <Route path="/services" view=Services />
                        <Route path="/faqs" view=Faqs />
                        <Route path="/contact" view=Contact />
                        <Route path="/login" view=Login />
                        <Route path="/auth/callback" view=AuthCallback />
                        <Route path="/maids" view=Catalogue />
                        <Route path="/showcase" view=Showcase />
                        <Route path="/admin/maids/new" view=AdminEdit />
                        <Route path="/admin/maids/:id" view=AdminEdit />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Overlays
                <DetailPopup />
                <LoginPrompt />
                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = chrono::Local::now().format("%Y").to_string();

    view! {
        <footer class="bg-slate-800 text-slate-300 mt-12">
            <div class="container mx-auto px-4 py-8 grid gap-6 md:grid-cols-3 text-sm">
                <div>
                    <p class="text-white font-semibold text-lg">"HelperHub"</p>
                    <p class="mt-2">"Matching families with trusted domestic helpers."</p>
                </div>
                <div class="flex flex-col space-y-1">
                    <A href="/maids" class="hover:text-white">"Find a Helper"</A>
                    <A href="/services" class="hover:text-white">"Services"</A>
                    <A href="/faqs" class="hover:text-white">"FAQs"</A>
                    <A href="/contact" class="hover:text-white">"Contact"</A>
                </div>
                <div class="md:text-right text-slate-400">
                    {format!("© {} HelperHub. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-teal-600 hover:bg-teal-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
