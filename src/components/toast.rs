//! Notification Surfaces
//!
//! Success toast stack and blocking error dialog, fed from AppContext.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::context::{AppContext, Toast};

/// How long a toast stays up
const TOAST_DISMISS_MS: i32 = 3000;
/// Countdown resolution
const TOAST_TICK_MS: i32 = 100;

/// Top-right stack of transient success toasts
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast /> }
            />
        </div>
    }
}

/// Single toast with a draining progress bar.
/// The countdown only advances while the pointer is outside the card.
#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (hovered, set_hovered) = signal(false);
    let (remaining, set_remaining) = signal(TOAST_DISMISS_MS);
    let id = toast.id;

    spawn_local(async move {
        while remaining.get_untracked() > 0 {
            TimeoutFuture::new(TOAST_TICK_MS as u32).await;
            if !hovered.get_untracked() {
                set_remaining.update(|ms| *ms -= TOAST_TICK_MS);
            }
        }
        ctx.dismiss_toast(id);
    });

    view! {
        <div
            class="toast toast-success"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <span class="toast-icon">"✓"</span>
            <span class="toast-title">{toast.title.clone()}</span>
            <div
                class="toast-progress"
                style:width=move || format!("{}%", remaining.get() * 100 / TOAST_DISMISS_MS)
            ></div>
        </div>
    }
}

/// Blocking error dialog, dismissed by its OK button
#[component]
pub fn ErrorDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error_notice.get().map(|notice| view! {
            <div class="dialog-backdrop">
                <div class="error-dialog">
                    <span class="error-dialog-icon">"!"</span>
                    <p class="error-dialog-title">{notice.title.clone()}</p>
                    <p class="error-dialog-text">{notice.message.clone()}</p>
                    <button class="error-dialog-ok" on:click=move |_| ctx.clear_error()>
                        "OK"
                    </button>
                </div>
            </div>
        })}
    }
}
