//! Toast Notifications
//!
//! Signal-backed notice sink and the stack that renders it. Errors stay until
//! dismissed, advisories fade out on their own.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ADVISORY_TIMEOUT_MS;
use crate::notify::{Notice, NoticeLevel, NoticeSink};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone)]
pub struct ToastSink {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Arc<AtomicU64>,
}

impl ToastSink {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(Vec::new()), next_id: Arc::new(AtomicU64::new(0)) }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl NoticeSink for ToastSink {
    fn push(&self, notice: Notice) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let fades = notice.level == NoticeLevel::Advisory;
        self.toasts.update(|list| list.push(Toast { id, notice }));

        if fades {
            let sink = self.clone();
            spawn_local(async move {
                TimeoutFuture::new(ADVISORY_TIMEOUT_MS).await;
                sink.dismiss(id);
            });
        }
    }
}

#[component]
pub fn ToastStack(sink: ToastSink) -> impl IntoView {
    let toasts = sink.toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let sink = sink.clone();
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Error => "toast toast-error",
                        NoticeLevel::Advisory => "toast toast-advisory",
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="toast-message">{toast.notice.message.clone()}</span>
                            {toast.notice.detail.clone().map(|detail| view! {
                                <details class="toast-detail">
                                    <summary>"Details"</summary>
                                    <code>{detail}</code>
                                </details>
                            })}
                            <button class="toast-close" on:click=move |_| sink.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
