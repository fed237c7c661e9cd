use yew::prelude::*;

use crate::hooks::use_toast::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Option<Toast>,
}

/// Transient toast rendered above the page content. Dismissal is handled
/// by the owning page's toast hook.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };
    let class = match toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };
    html! {
        <div class={class} role="status">
            {&toast.message}
        </div>
    }
}
