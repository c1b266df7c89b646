//! Tracks which heading of the current page is being read.

/// Observer root margin: only the top fifth of the viewport counts as visible.
pub const ROOT_MARGIN: &str = "0px 0px -80% 0px";

pub const THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.25, 0.5, 0.75, 1.0];

/// One intersection observation for a heading element.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingVisibility {
    pub id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Pick the heading to highlight from one batch of observations.
///
/// The first intersecting entry wins. If none intersects, the entry whose
/// ratio is closest to 1 is chosen (earliest on ties). An empty batch
/// yields `None`.
pub fn active_heading(entries: &[HeadingVisibility]) -> Option<&str> {
    entries
        .iter()
        .find(|entry| entry.is_intersecting)
        .or_else(|| {
            entries
                .iter()
                .min_by(|a, b| (1.0 - a.ratio).abs().total_cmp(&(1.0 - b.ratio).abs()))
        })
        .map(|entry| entry.id.as_str())
}

#[cfg(feature = "hydrate")]
pub use observer::HeadingObserver;

#[cfg(feature = "hydrate")]
mod observer {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{active_heading, HeadingVisibility, ROOT_MARGIN, THRESHOLDS};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// IntersectionObserver over the heading elements with the given ids.
    /// Disconnects when dropped.
    pub struct HeadingObserver {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl HeadingObserver {
        pub fn observe(ids: &[String], on_active: impl Fn(String) + 'static) -> Result<Self, JsValue> {
            let callback = ObserverCallback::new(move |entries: js_sys::Array, _observer| {
                let batch: Vec<HeadingVisibility> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| HeadingVisibility {
                        id: entry.target().id(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect();
                if let Some(id) = active_heading(&batch) {
                    on_active(id.to_string());
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_root_margin(ROOT_MARGIN);
            let thresholds: js_sys::Array = THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
            options.set_threshold(&thresholds);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| JsValue::from_str("no document available"))?;
            for id in ids {
                if let Some(element) = document.get_element_by_id(id) {
                    observer.observe(&element);
                }
            }

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for HeadingObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(id: &str, is_intersecting: bool, ratio: f64) -> HeadingVisibility {
        HeadingVisibility {
            id: id.to_string(),
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn test_first_intersecting_wins() {
        let batch = [
            seen("prerequisites", false, 0.9),
            seen("creating-your-first-project", true, 0.1),
            seen("next-steps", true, 1.0),
        ];
        assert_eq!(active_heading(&batch), Some("creating-your-first-project"));
    }

    #[test]
    fn test_closest_to_fully_visible_when_none_intersect() {
        let batch = [
            seen("a", false, 0.1),
            seen("b", false, 0.75),
            seen("c", false, 0.5),
        ];
        assert_eq!(active_heading(&batch), Some("b"));
    }

    #[test]
    fn test_ties_keep_earliest() {
        let batch = [seen("a", false, 0.0), seen("b", false, 0.0)];
        assert_eq!(active_heading(&batch), Some("a"));
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(active_heading(&[]), None);
    }
}
