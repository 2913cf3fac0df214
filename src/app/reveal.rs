use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// How a content block transitions from hidden to visible when it enters
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must intersect before it reveals.
    pub threshold: f64,
    /// Latch on first intersection instead of following scroll in and out.
    pub fire_once: bool,
    /// Extra transition delay per list index, in milliseconds.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            fire_once: true,
            stagger_ms: 0,
        }
    }
}

impl RevealConfig {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.fire_once = false;
        self
    }

    pub fn stagger_ms(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.stagger_ms
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// Next visibility state given the latest observer entry. Fire-once never
/// returns to hidden after the first intersection.
pub fn advance(visible: bool, intersecting: bool, fire_once: bool) -> bool {
    if fire_once {
        visible || intersecting
    } else {
        intersecting
    }
}

pub fn reveal_class(visible: bool, extra: &str) -> String {
    let state = if visible {
        "opacity-100 translate-y-0 scale-100"
    } else {
        "opacity-0 translate-y-8 scale-95"
    };
    let mut class = format!("transition-all duration-700 ease-out {state}");
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Observes its own wrapper element and toggles the hidden/visible utility
/// classes on intersection. The observer is released when the component is
/// unmounted; server-side it never attaches, so the block renders without
/// animating.
#[component]
pub fn Reveal(
    #[prop(optional)] config: RevealConfig,
    #[prop(default = 0)] index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            let next = advance(visible.get_untracked(), intersecting, config.fire_once);
            if next != visible.get_untracked() {
                set_visible(next);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![config.threshold]),
    );

    let delay = config.delay_for(index);
    view! {
        <div
            node_ref=target
            class=move || reveal_class(visible.get(), &class)
            style:transition-delay=format!("{delay}ms")
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_once_latches_on_first_intersection() {
        let mut visible = false;
        // scroll cycles: enters, leaves, enters again
        for &intersecting in &[false, true, false, true, false] {
            visible = advance(visible, intersecting, true);
            if intersecting {
                assert!(visible);
            }
        }
        // stayed visible after leaving the viewport
        assert!(advance(true, false, true));
    }

    #[test]
    fn fire_once_reveals_at_most_once() {
        let mut visible = false;
        let mut transitions = 0;
        for &intersecting in &[true, false, true, false, true] {
            let next = advance(visible, intersecting, true);
            if next && !visible {
                transitions += 1;
            }
            visible = next;
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn repeating_follows_the_observer() {
        assert!(advance(false, true, false));
        assert!(!advance(true, false, false));
    }

    #[test]
    fn stagger_delay_scales_with_index() {
        let config = RevealConfig::default().stagger_ms(100);
        assert_eq!(config.delay_for(0), 0);
        assert_eq!(config.delay_for(3), 300);
        let unstaggered = RevealConfig::default();
        assert_eq!(unstaggered.delay_for(7), 0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = RevealConfig::default().threshold(0.2).repeating();
        assert_eq!(config.threshold, 0.2);
        assert!(!config.fire_once);
        let default = RevealConfig::default();
        assert_eq!(default.threshold, 0.1);
        assert!(default.fire_once);
    }

    #[test]
    fn classes_switch_between_hidden_and_visible_state() {
        let hidden = reveal_class(false, "");
        assert!(hidden.contains("opacity-0"));
        let visible = reveal_class(true, "mb-4");
        assert!(visible.contains("opacity-100"));
        assert!(visible.ends_with("mb-4"));
    }
}
