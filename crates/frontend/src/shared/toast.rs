//! Toast notifications.
//!
//! [`ToastService`] is provided once at the app root; [`ToastHost`] renders
//! the queue in the top-right corner.

use contracts::shared::config::DEFAULT_TOAST_DURATION_MS;
use contracts::shared::notifications::{Notice, Notifier, ToastId, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
        }
    }

    pub fn show(&self, notice: Notice) -> ToastId {
        self.show_for(notice, DEFAULT_TOAST_DURATION_MS)
    }

    /// `duration_ms == 0` keeps the toast until it is dismissed.
    pub fn show_for(&self, notice: Notice, duration_ms: u32) -> ToastId {
        let mut id = 0;
        self.queue.update(|q| id = q.push(notice, duration_ms));

        if duration_ms > 0 {
            let queue = self.queue;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                queue.try_update(|q| q.remove(id));
            });
        }
        id
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| {
            q.remove(id);
        });
    }

    pub fn success(&self, title: &str, message: impl Into<String>) -> ToastId {
        self.show(Notice::success(title, message))
    }

    pub fn error(&self, title: &str, message: impl Into<String>) -> ToastId {
        self.show(Notice::error(title, message))
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastService {
    fn notify(&self, notice: Notice) {
        self.show(notice);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                service
                    .queue
                    .with(|q| q.visible().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!("toast toast--{}", toast.notice.kind.as_str());
                        view! {
                            <div class=class role="status">
                                <div class="toast__body">
                                    <div class="toast__title">{toast.notice.title}</div>
                                    {toast.notice.message.map(|m| view! {
                                        <div class="toast__message">{m}</div>
                                    })}
                                </div>
                                <button
                                    class="button button--icon toast__close"
                                    on:click=move |_| service.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
