use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, MouseEvent};

use crate::client::timer::{PendingTimeout, COPY_ACK_DURATION_MS};

const COPIED_CLASS: &str = "copied";

/// Click handler delegated from the rendered document body.
///
/// Reacts to clicks on a code block's `.copy-button`: copies the text of the
/// sibling `<pre>` and flags the button as copied for a couple of seconds.
pub fn copy_code_block(ev: &MouseEvent, ack: PendingTimeout) {
    let Some(button) = ev
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(".copy-button").ok().flatten())
    else {
        return;
    };
    let Some(code) = button
        .parent_element()
        .and_then(|block| block.query_selector("pre").ok().flatten())
        .and_then(|pre| pre.text_content())
    else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let write = window.navigator().clipboard().write_text(&code);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(write).await {
            Ok(_) => mark_copied(&button, ack),
            Err(e) => leptos::logging::error!("Failed to copy: {e:?}"),
        }
    });
}

fn mark_copied(button: &Element, ack: PendingTimeout) {
    // Only one acknowledgement runs at a time; reset whichever button had it
    reset_copied_buttons();
    set_copied(button, true);

    let button = button.clone();
    ack.schedule(COPY_ACK_DURATION_MS, move || set_copied(&button, false));
}

fn reset_copied_buttons() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(buttons) = document.query_selector_all(".doc-content .copy-button.copied") else {
        return;
    };
    for index in 0..buttons.length() {
        if let Some(button) = buttons.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            set_copied(&button, false);
        }
    }
}

fn set_copied(button: &Element, copied: bool) {
    let classes = button.class_list();
    let (label, title) = if copied {
        let _ = classes.add_1(COPIED_CLASS);
        ("Copied!", "Copied!")
    } else {
        let _ = classes.remove_1(COPIED_CLASS);
        ("Copy", "Copy code")
    };
    button.set_text_content(Some(label));
    let _ = button.set_attribute("title", title);
}
