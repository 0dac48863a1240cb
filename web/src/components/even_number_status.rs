//! Even Number Status Widget
//!
//! Shows the contract's current value and submits new ones. All state
//! transitions go through [`EvenNumberViewState::apply`]; this component only
//! wires events to the signal.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::status::{EvenNumberFlow, EvenNumberViewState, StatusEvent, StatusLine};

use crate::services::{browser_resolver, BrowserRandomSeal};

#[component]
pub fn EvenNumberStatus() -> impl IntoView {
    let state = RwSignal::new(EvenNumberViewState::default());

    // Initial read on mount
    leptos::task::spawn_local(async move {
        let resolver = browser_resolver();
        let seal = BrowserRandomSeal;
        let mut emit = move |event: StatusEvent| state.update(|s| s.apply(event));
        EvenNumberFlow::new(&resolver, &seal).refresh(&mut emit).await;
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let input = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(input)) => input,
            Some(Err(err)) => {
                log::warn!("[SUBMIT] ignored: {}", err);
                state.update(|s| s.error = Some(err.user_message()));
                return;
            }
            None => return,
        };

        leptos::task::spawn_local(async move {
            let resolver = browser_resolver();
            let seal = BrowserRandomSeal;
            let mut emit = move |event: StatusEvent| state.update(|s| s.apply(event));
            match EvenNumberFlow::new(&resolver, &seal).submit(&input, &mut emit).await {
                Ok(receipt) => log::debug!("[SUBMIT] widget settled on {:#x}", receipt.transaction_hash),
                Err(err) => log::debug!("[SUBMIT] widget settled with error: {}", err),
            }
        });
    };

    view! {
        <div class="card widget">
            <h2 class="card-title">"Even Number Status"</h2>

            {move || match state.with(|s| s.status_line()) {
                StatusLine::Error(msg) => view! {
                    <p class="status-text error">{msg}</p>
                }.into_any(),
                StatusLine::Notice(msg) => view! {
                    <p class="status-text notice">{msg}</p>
                }.into_any(),
                StatusLine::Value(value) => view! {
                    <p class="status-text">"Current even number: " {value}</p>
                }.into_any(),
                StatusLine::Loading => view! {
                    <p class="status-text">"Loading..."</p>
                }.into_any(),
            }}

            {move || state.with(|s| s.pending_tx()).map(|tx| view! {
                <p class="tx-hash">"Transaction: " {tx}</p>
            })}

            <form class="number-form" on:submit=on_submit>
                <input
                    type="number"
                    class="number-input"
                    placeholder="Enter an even number"
                    prop:value=move || state.with(|s| s.input.clone())
                    on:input=move |ev| {
                        state.update(|s| s.apply(StatusEvent::InputChanged(event_target_value(&ev))))
                    }
                />
                <button
                    type="submit"
                    class="btn"
                    disabled=move || !state.with(|s| s.can_submit())
                >
                    {move || if state.with(|s| s.can_submit()) { "Set Number" } else { "Pending..." }}
                </button>
            </form>
        </div>
    }
}
