use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{CTA, CtaBand, PageHero};
use crate::components::icon::{Glyph, Icon};
use crate::components::motion::{Motion, Reveal};
use crate::config::COMPANY;
use crate::content::{PROJECTS, Project};
use crate::state::gallery::{Category, filter_projects};

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-6 py-2 rounded-md text-sm font-medium bg-white text-primary-600 shadow-sm"
    } else {
        "px-6 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900"
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-item group relative overflow-hidden rounded-3xl bg-white shadow-sm border border-gray-100 \
                    hover-scale glow-card transition-transform hover:-translate-y-2">
            <div class="aspect-[4/3] overflow-hidden relative">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 \
                            group-hover:opacity-100 transition-opacity duration-300 flex items-end p-6">
                    <a href="#" class="text-white font-medium flex items-center gap-2 group/link">
                        "View Project"
                        <Glyph icon=Icon::ExternalLink class="h-4 w-4 group-hover/link:translate-x-1 transition-transform"/>
                    </a>
                </div>
            </div>

            <div class="p-6">
                <div class="mb-2">
                    <span class="text-xs font-medium bg-gradient-to-r from-primary-600/20 to-secondary-400/20 text-primary-600 px-3 py-1 rounded-full">
                        { project.category.label() }
                    </span>
                </div>
                <h3 class="text-xl font-semibold mb-2 highlight-text">{ project.title }</h3>
                <p class="text-gray-600 mb-4">{ project.description }</p>
                <a href="#" class="text-primary-600 font-medium flex items-center gap-2 group/link">
                    "View Project"
                    <Glyph icon=Icon::ExternalLink class="h-4 w-4 group-hover/link:translate-x-1 transition-transform"/>
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let active = RwSignal::new(Category::default());

    let tabs = Category::TABS
        .into_iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <Reveal motion=Motion::fade_up(10).duration(300).stagger(i, 100) on_mount=true>
                    <button
                        type="button"
                        class=move || tab_class(active.get() == category)
                        on:click=move |_| {
                            log::debug!("gallery filter: {category}");
                            active.set(category);
                        }
                    >
                        { category.label() }
                    </button>
                </Reveal>
            }
        })
        .collect_view();

    let grid = move || {
        filter_projects(PROJECTS, active.get())
            .into_iter()
            .enumerate()
            .map(|(i, project)| {
                view! {
                    <Reveal motion=Motion::fade_up(50).duration(800).stagger(i, 100) on_mount=true>
                        <ProjectCard project/>
                    </Reveal>
                }
            })
            .collect_view()
    };

    view! {
        <Title text=format!("Gallery | {COMPANY}")/>
        <PageHero title="Gallery" blurb="Showcasing a collection of our latest works and projects."/>

        <section class="py-16 md:py-24">
            <div class="container mx-auto px-4">
                <Reveal motion=Motion::fade_up(20).duration(500).delay(300) on_mount=true class="flex justify-center mb-12">
                    <div role="tablist" class="inline-flex items-center rounded-lg bg-light-gray p-1">{ tabs }</div>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{ grid }</div>
            </div>
        </section>

        <CtaBand
            title="Interested in working together?"
            blurb="Let's discuss how we can help bring your vision to life with creative design and development solutions."
        >
            <A href="/contact" attr:class=CTA>
                "Contact Me" <Glyph icon=Icon::ArrowRight/>
            </A>
        </CtaBand>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_is_highlighted() {
        assert!(tab_class(true).contains("text-primary-600"));
        assert!(!tab_class(false).contains("text-primary-600"));
    }
}
