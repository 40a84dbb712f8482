//! Toast notifications.

use leptos::prelude::*;
use seva_kendra::notify::{NOTICE_TTL, Notice, NoticeLevel};

#[derive(Clone, Copy)]
pub struct NoticeContext {
    notices: RwSignal<Vec<Notice>>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
        }
    }

    /// Show `notice` and drop it after the display period.
    pub fn push(&self, notice: Notice) {
        let id = notice.id;
        let notices = self.notices;
        notices.update(|list| list.push(notice));
        set_timeout(
            move || {
                notices.try_update(|list| list.retain(|n| n.id != id));
            },
            NOTICE_TTL,
        );
    }

    pub fn push_opt(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.push(notice);
        }
    }

    pub fn dismiss(&self, id: uuid::Uuid) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_notices();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ctx.notices.get()
                key=|n| n.id
                children=move |notice| {
                    let class = match notice.level {
                        NoticeLevel::Success => "alert alert-success shadow-lg",
                        NoticeLevel::Error => "alert alert-error shadow-lg",
                        NoticeLevel::Info => "alert alert-info shadow-lg",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="alert" on:click=move |_| ctx.dismiss(id)>
                            <span>{notice.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
