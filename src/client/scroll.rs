/// Element id named by a URL fragment: `#key-features` → `key-features`.
/// Percent-escapes are decoded. `None` for an empty fragment.
pub fn fragment_target(hash: &str) -> Option<String> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return None;
    }
    let id = urlencoding::decode(fragment)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(id)
}

/// Bring the heading named by `location.hash` into view, or go back to the top
/// of the page when there is no fragment.
///
/// Run once a page's content is in the DOM; the router's own scroll happens
/// before asynchronously loaded content exists.
#[cfg(feature = "hydrate")]
pub fn scroll_to_location_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };

    match window.location().hash().ok().and_then(|hash| fragment_target(&hash)) {
        Some(id) => {
            let target = window.document().and_then(|document| document.get_element_by_id(&id));
            if let Some(element) = target {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        None => window.scroll_to_with_x_and_y(0.0, 0.0),
    }
}
