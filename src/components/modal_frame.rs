//! Modal Frame Component
//!
//! Overlay plus a positioned surface. Content renders its own header and
//! actions.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Modal container
///
/// # Arguments
/// * `on_close` - Called when the overlay is clicked while `close_on_overlay` holds
/// * `close_on_overlay` - Whether an overlay click may close the modal right now
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    #[prop(into, optional)] close_on_overlay: Option<Signal<bool>>,
    #[prop(into, optional)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or_else(|| Signal::stored(true));
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    // Press and release must both land on the overlay, so text selection
    // that ends outside the surface does not close it.
    let on_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let on_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay.get_untracked() && overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // The overlay must not be removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div class="modal-overlay" on:mousedown=on_mouse_down on:click=on_overlay_click>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {title.map(|title| view! { <h2 class="modal-title">{title}</h2> })}
                {children()}
            </div>
        </div>
    }
}
