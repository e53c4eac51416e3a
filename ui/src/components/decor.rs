use leptos::html::{Div, Span};
use leptos::prelude::{
    Children, ClassAttribute, CollectView, Effect, ElementChild, Get, NodeRef, NodeRefAttribute,
    RwSignal, Set, StyleAttribute,
};
use leptos::{IntoView, component, view};
use leptos_use::use_intersection_observer;
use rand::Rng;

use super::motion::Motion;

/// Red-to-yellow gradient text that fades up the first time it is seen.
#[component]
pub fn GradientText(
    #[prop(optional)] class: &'static str,
    /// Slowly shift the gradient as well.
    #[prop(optional)]
    animate: bool,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Span>::new();
    let shown = RwSignal::new(false);
    let motion = Motion::fade_up(20);

    use_intersection_observer(target, move |entries, _| {
        if entries.iter().any(|e| e.is_intersecting()) {
            shown.set(true);
        }
    });

    let classes = format!(
        "inline-block text-red-yellow-gradient font-bold {} {}",
        if animate { "bg-gradient-animation" } else { "" },
        class
    );

    view! {
        <span node_ref=target class=classes style=move || motion.style(shown.get())>
            { children() }
        </span>
    }
}

pub const BUBBLE_SIZE_PX: std::ops::Range<f64> = 40.0..120.0;
pub const BUBBLE_DELAY_S: std::ops::Range<f64> = 0.0..5.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleTone {
    Primary,
    Secondary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BubbleSpec {
    pub size_px: f64,
    pub left_px: f64,
    pub delay_s: f64,
    pub tone: BubbleTone,
    /// Which of the three `animate-float-*` keyframes to use.
    pub float_variant: usize,
}

impl BubbleSpec {
    pub fn roll<R: Rng>(index: usize, container_width: f64, rng: &mut R) -> Self {
        let left_px = if container_width > 0.0 {
            rng.gen_range(0.0..container_width)
        } else {
            0.0
        };

        Self {
            size_px: rng.gen_range(BUBBLE_SIZE_PX),
            left_px,
            delay_s: rng.gen_range(BUBBLE_DELAY_S),
            tone: if index % 2 == 0 {
                BubbleTone::Primary
            } else {
                BubbleTone::Secondary
            },
            float_variant: index % 3,
        }
    }

    pub fn class(&self) -> String {
        let bg = match self.tone {
            BubbleTone::Primary => "bg-primary-600",
            BubbleTone::Secondary => "bg-secondary-400",
        };
        format!(
            "bubble absolute bottom-0 rounded-full opacity-10 {bg} animate-float-{}",
            self.float_variant
        )
    }

    pub fn style(&self) -> String {
        format!(
            "width: {s:.0}px; height: {s:.0}px; left: {:.0}px; animation-delay: {:.2}s;",
            self.left_px,
            self.delay_s,
            s = self.size_px,
        )
    }
}

pub fn roll_bubbles<R: Rng>(count: usize, container_width: f64, rng: &mut R) -> Vec<BubbleSpec> {
    (0..count)
        .map(|i| BubbleSpec::roll(i, container_width, rng))
        .collect()
}

/// Translucent bubbles rising behind a section. Sizes and positions are
/// rolled once the container has a width.
#[component]
pub fn FloatingBubbles(
    #[prop(default = 8)] count: usize,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let bubbles = RwSignal::new(Vec::<BubbleSpec>::new());

    Effect::new(move |_| {
        if let Some(el) = container.get() {
            let width = el.offset_width() as f64;
            bubbles.set(roll_bubbles(count, width, &mut rand::thread_rng()));
        }
    });

    view! {
        <div
            node_ref=container
            class=format!("absolute inset-0 overflow-hidden pointer-events-none {class}")
        >
            { move || bubbles.get()
                .into_iter()
                .map(|b| view! { <div class=b.class() style=b.style()></div> })
                .collect_view()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolled_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let bubbles = roll_bubbles(64, 900.0, &mut rng);
        assert_eq!(bubbles.len(), 64);

        for b in &bubbles {
            assert!(BUBBLE_SIZE_PX.contains(&b.size_px), "size {}", b.size_px);
            assert!((0.0..900.0).contains(&b.left_px), "left {}", b.left_px);
            assert!(BUBBLE_DELAY_S.contains(&b.delay_s), "delay {}", b.delay_s);
        }
    }

    #[test]
    fn tone_and_variant_follow_index() {
        let mut rng = StdRng::seed_from_u64(1);
        let bubbles = roll_bubbles(6, 300.0, &mut rng);

        let tones: Vec<_> = bubbles.iter().map(|b| b.tone).collect();
        assert_eq!(tones[0], BubbleTone::Primary);
        assert_eq!(tones[1], BubbleTone::Secondary);
        assert_eq!(tones[4], BubbleTone::Primary);

        let variants: Vec<_> = bubbles.iter().map(|b| b.float_variant).collect();
        assert_eq!(variants, vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn zero_width_container_pins_left() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(roll_bubbles(5, 0.0, &mut rng).iter().all(|b| b.left_px == 0.0));
    }

    #[test]
    fn css_output() {
        let b = BubbleSpec {
            size_px: 64.4,
            left_px: 120.0,
            delay_s: 1.5,
            tone: BubbleTone::Secondary,
            float_variant: 2,
        };
        assert_eq!(
            b.style(),
            "width: 64px; height: 64px; left: 120px; animation-delay: 1.50s;"
        );
        assert!(b.class().ends_with("bg-secondary-400 animate-float-2"));
    }

    #[test]
    fn same_seed_same_layout() {
        let a = roll_bubbles(8, 500.0, &mut StdRng::seed_from_u64(42));
        let b = roll_bubbles(8, 500.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
