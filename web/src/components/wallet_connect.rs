//! Wallet Connect Widget

use leptos::prelude::*;
use shared::wallet::{connect_wallet, ConnectionState};

use crate::services::browser_resolver;

#[component]
pub fn WalletConnect() -> impl IntoView {
    let connection = RwSignal::new(ConnectionState::default());

    let connect = move |_| {
        if connection.with_untracked(|c| c.connecting) {
            return;
        }
        connection.update(|c| c.set_connecting());

        leptos::task::spawn_local(async move {
            let resolver = browser_resolver();
            match connect_wallet(&resolver).await {
                Ok(address) => {
                    log::info!("[WALLET] connected: {}", address);
                    connection.update(|c| c.set_connected(address));
                }
                Err(e) => {
                    log::error!("[WALLET] failed to connect wallet: {}", e);
                    connection.update(|c| c.set_failed(&e));
                }
            }
        });
    };

    view! {
        <div class="card widget">
            <h2 class="card-title">"Wallet"</h2>
            {move || match connection.with(|c| c.display_address()) {
                Some(address) => view! {
                    <p class="status-text">"Connected: " {address}</p>
                }.into_any(),
                None => view! {
                    <div>
                        <button
                            class="btn"
                            on:click=connect
                            disabled=move || connection.with(|c| c.connecting)
                        >
                            {move || if connection.with(|c| c.connecting) {
                                "Connecting..."
                            } else {
                                "Connect Wallet"
                            }}
                        </button>
                        {move || connection.with(|c| c.error.clone()).map(|err| view! {
                            <p class="status-text error">{err}</p>
                        })}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
