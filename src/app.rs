//! User Scroll Frontend App
//!
//! Page shell: splash loader over an infinitely-scrolling user list.

use leptos::prelude::*;

use crate::components::{PulseLoader, UserList};

#[component]
pub fn App() -> impl IntoView {
    // True while the splash animation is still showing; gates the list
    let (is_loading, set_is_loading) = signal(true);

    view! {
        <div class="container">
            <header class="header">
                <nav>
                    <h1>"Users"</h1>
                </nav>
            </header>

            <main class="main">
                <PulseLoader
                    on_loading_complete=Callback::new(move |_| set_is_loading.set(false))
                    duration_ms=3000
                />

                <UserList is_loading=is_loading/>
            </main>
        </div>
    }
}
