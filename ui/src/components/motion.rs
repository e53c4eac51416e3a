use leptos::html::Div;
use leptos::prelude::{
    Children, ClassAttribute, ElementChild, Get, NodeRef, NodeRefAttribute, RwSignal, Set,
    StyleAttribute, request_animation_frame,
};
use leptos::{IntoView, component, view};
use leptos_use::use_intersection_observer;

const DEFAULT_DURATION_MS: u32 = 600;
/// Hero blobs drift this far (in % of their own height) over a full page scroll.
pub const PARALLAX_MAX_PCT: f64 = 50.0;

/// Entrance transition: where an element starts, and how it gets home.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion {
    pub x: i32,
    pub y: i32,
    pub scale: Option<f32>,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub const fn fade() -> Self {
        Self {
            x: 0,
            y: 0,
            scale: None,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
        }
    }

    pub const fn fade_up(y: i32) -> Self {
        Self { y, ..Self::fade() }
    }

    pub const fn slide(x: i32) -> Self {
        Self { x, ..Self::fade() }
    }

    pub const fn pop(scale: f32) -> Self {
        Self {
            scale: Some(scale),
            ..Self::fade()
        }
    }

    pub const fn duration(self, ms: u32) -> Self {
        Self {
            duration_ms: ms,
            ..self
        }
    }

    pub const fn delay(self, ms: u32) -> Self {
        Self {
            delay_ms: ms,
            ..self
        }
    }

    /// Adds `index * step_ms` on top of any base delay.
    pub const fn stagger(self, index: usize, step_ms: u32) -> Self {
        Self {
            delay_ms: self.delay_ms + index as u32 * step_ms,
            ..self
        }
    }

    pub fn transform(&self, shown: bool) -> String {
        if shown {
            return "translate3d(0, 0, 0) scale(1)".to_owned();
        }
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.x,
            self.y,
            self.scale.unwrap_or(1.0)
        )
    }

    pub fn style(&self, shown: bool) -> String {
        let (d, delay) = (self.duration_ms, self.delay_ms);
        format!(
            "opacity: {}; transform: {}; \
             transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            if shown { 1 } else { 0 },
            self.transform(shown),
        )
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::fade_up(20)
    }
}

/// Plays `motion` once: on first intersection with the viewport, or right
/// after mount when `on_mount` is set.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_mount: bool,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let shown = RwSignal::new(false);

    if on_mount {
        // next frame, so the hidden state gets painted first
        request_animation_frame(move || shown.set(true));
    } else {
        use_intersection_observer(target, move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                shown.set(true);
            }
        });
    }

    view! {
        <div node_ref=target class=class style=move || motion.style(shown.get())>
            { children() }
        </div>
    }
}

/// Page scroll position normalised to 0..=1.
pub fn scroll_progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let range = doc_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

pub fn parallax_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_MAX_PCT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_uses_offsets() {
        let m = Motion::fade_up(30);
        assert_eq!(m.transform(false), "translate3d(0px, 30px, 0) scale(1)");
        assert_eq!(m.transform(true), "translate3d(0, 0, 0) scale(1)");

        let pop = Motion::pop(0.9);
        assert_eq!(pop.transform(false), "translate3d(0px, 0px, 0) scale(0.9)");
    }

    #[test]
    fn style_carries_duration_and_delay() {
        let style = Motion::slide(-50).duration(800).delay(200).style(false);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate3d(-50px, 0px, 0)"));
        assert!(style.contains("opacity 800ms ease-out 200ms"));
        assert!(style.contains("transform 800ms ease-out 200ms"));
        assert!(Motion::fade().style(true).starts_with("opacity: 1;"));
    }

    #[test]
    fn stagger_is_linear_and_keeps_base_delay() {
        let base = Motion::fade_up(20).delay(300);
        let delays: Vec<u32> = (0..4).map(|i| base.stagger(i, 100).delay_ms).collect();
        assert_eq!(delays, vec![300, 400, 500, 600]);
    }

    #[test]
    fn progress_clamps_and_handles_short_pages() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn parallax_tops_out_at_half() {
        assert_eq!(parallax_percent(0.0), 0.0);
        assert_eq!(parallax_percent(0.5), 25.0);
        assert_eq!(parallax_percent(2.0), PARALLAX_MAX_PCT);
    }
}
