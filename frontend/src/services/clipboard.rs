//! Copy-to-clipboard with a hidden-textarea fallback. A failed copy is a
//! non-critical side effect: it gets logged and swallowed, never surfaced
//! as an error to the user.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::services::logging::Logger;

pub fn copy_text(text: &str) {
    let text = text.to_string();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        if JsFuture::from(clipboard.write_text(&text)).await.is_ok() {
            return;
        }
        Logger::warn_with_component(
            "clipboard",
            "navigator.clipboard write failed, trying textarea fallback",
        );
        if !fallback_copy(&text) {
            Logger::error_with_component("clipboard", "copy to clipboard failed");
        }
    });
}

/// Legacy path: select the value inside an off-screen textarea and run the
/// `copy` document command.
fn fallback_copy(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(textarea) = document
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };
    textarea.set_value(text);
    // display:none would break select(), so park it off-screen instead
    let _ = textarea.style().set_property("position", "fixed");
    let _ = textarea.style().set_property("left", "-9999px");

    let Some(body) = document.body() else {
        return false;
    };
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|doc| doc.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    copied
}
