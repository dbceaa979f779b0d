//! Transient notifications
//!
//! One toast at a time; a newer toast replaces the current one and each is
//! dismissed after [`TOAST_DURATION`].

use std::time::Duration;

use clubsport::pages::{ActionError, Notice};
use leptos::prelude::*;

pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, notice: Notice) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some((id, notice)));

        let current = self.current;
        set_timeout(
            move || {
                // only dismiss the toast this timer was started for
                if current.with_untracked(|c| c.as_ref().is_some_and(|(i, _)| *i == id)) {
                    current.set(None);
                }
            },
            TOAST_DURATION,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notice::error(message));
    }

    pub fn action_error(&self, err: &ActionError) {
        self.show(err.notice());
    }

    /// Shows the optional notice of a page read.
    pub fn maybe(&self, notice: Option<Notice>) {
        if let Some(notice) = notice {
            self.show(notice);
        }
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let current = toaster.current;

    move || {
        current.get().map(|(_, notice)| {
            let class = if notice.is_error() {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class=class role="alert">
                        <span>{notice.message}</span>
                    </div>
                </div>
            }
        })
    }
}
