//! Home Page - wallet and even-number widgets side by side

use leptos::prelude::*;

use crate::components::{EvenNumberStatus, WalletConnect};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <div class="banner">
                <p class="banner-title">"Highlander - There Can Be Only One"</p>
            </div>

            <div class="widget-grid">
                <WalletConnect/>
                <EvenNumberStatus/>
            </div>
        </main>
    }
}
