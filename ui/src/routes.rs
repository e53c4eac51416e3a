// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{
    about::About, contact::Contact, gallery::Gallery, home::Home, not_found::NotFound,
    services::Services,
};

/// Every addressable page. Navbar, footer and router all read this table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Gallery,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Gallery,
        Page::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Gallery => "Gallery",
            Page::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Gallery => "/gallery",
            Page::Contact => "/contact",
        }
    }

    /// `None` means the 404 view.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == path)
    }
}

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")              view=Home     />
        <Route path=path!("/about")        view=About    />
        <Route path=path!("/services")     view=Services />
        <Route path=path!("/gallery")      view=Gallery  />
        <Route path=path!("/contact")      view=Contact  />
      </Routes>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_resolves_from_its_own_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/gallery/"), Some(Page::Gallery));
        assert_eq!(Page::from_path(""), Some(Page::Home));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        for path in ["/blog", "/about/team", "/Gallery", "/contact-us"] {
            assert_eq!(Page::from_path(path), None, "{path}");
        }
    }

    #[test]
    fn unknown_path_falls_back_to_a_page_that_links_home() {
        assert_eq!(Page::from_path("/no/such/page"), None);
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::from_path(Page::Home.path()), Some(Page::Home));
    }

    #[test]
    fn nav_order_matches_footer_links() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Home", "About", "Services", "Gallery", "Contact"]);
    }
}
