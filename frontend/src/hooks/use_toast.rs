use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

pub struct UseToastResult {
    pub toast: Option<Toast>,
    pub show_success: Callback<String>,
    pub show_error: Callback<String>,
}

/// Transient notification state shared by a page: one toast at a time,
/// auto-dismissed after a few seconds.
#[hook]
pub fn use_toast() -> UseToastResult {
    let toast = use_state(|| Option::<Toast>::None);

    let show = {
        let toast = toast.clone();
        Callback::from(move |next: Toast| {
            toast.set(Some(next));
            let toast = toast.clone();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_MS).await;
                toast.set(None);
            });
        })
    };

    let show_success = {
        let show = show.clone();
        Callback::from(move |message: String| {
            show.emit(Toast {
                kind: ToastKind::Success,
                message,
            });
        })
    };

    let show_error = {
        let show = show.clone();
        Callback::from(move |message: String| {
            show.emit(Toast {
                kind: ToastKind::Error,
                message,
            });
        })
    };

    UseToastResult {
        toast: (*toast).clone(),
        show_success,
        show_error,
    }
}
