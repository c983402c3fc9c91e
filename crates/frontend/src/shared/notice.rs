use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Time a notice stays visible.
pub const NOTICE_MS: u32 = 3_000;

/// Transient result message of the last action on a page.
#[derive(Clone, Copy)]
pub struct Notice {
    pub message: RwSignal<Option<String>>,
    seq: RwSignal<u64>,
}

impl Notice {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            seq: RwSignal::new(0),
        }
    }

    /// Shows `message` and hides it after [`NOTICE_MS`] unless a newer
    /// notice replaced it meanwhile.
    pub fn show(&self, message: String) {
        let seq = self.seq.get_untracked() + 1;
        self.seq.set(seq);
        self.message.set(Some(message));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if this.seq.get_untracked() == seq {
                this.message.set(None);
            }
        });
    }
}

#[component]
pub fn NoticeBar(notice: Notice) -> impl IntoView {
    move || {
        notice
            .message
            .get()
            .map(|message| view! { <div class="notice" role="status">{message}</div> })
    }
}
