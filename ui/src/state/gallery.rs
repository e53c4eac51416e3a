use std::fmt;

use crate::content::Project;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Sentinel: no filtering.
    #[default]
    All,
    WebDesign,
    MobileApps,
    Branding,
}

impl Category {
    /// Tab order on the gallery page.
    pub const TABS: [Category; 4] = [
        Category::All,
        Category::WebDesign,
        Category::MobileApps,
        Category::Branding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::WebDesign => "Web Design",
            Category::MobileApps => "Mobile Apps",
            Category::Branding => "Branding",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::TABS.into_iter().find(|c| c.label() == label)
    }

    pub fn matches(self, project: &Project) -> bool {
        self == Category::All || project.category == self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projects visible under `category`, in listing order.
pub fn filter_projects(projects: &'static [Project], category: Category) -> Vec<&'static Project> {
    projects.iter().filter(|p| category.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_keeps_every_project_in_order() {
        let visible = filter_projects(PROJECTS, Category::All);
        assert_eq!(ids(&visible), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn each_category_selects_its_own_projects_in_order() {
        assert_eq!(ids(&filter_projects(PROJECTS, Category::WebDesign)), vec![1, 4, 7]);
        assert_eq!(ids(&filter_projects(PROJECTS, Category::MobileApps)), vec![2, 5, 8]);
        assert_eq!(ids(&filter_projects(PROJECTS, Category::Branding)), vec![3, 6, 9]);
    }

    #[test]
    fn filtered_sets_partition_the_list() {
        let total: usize = Category::TABS[1..]
            .iter()
            .map(|c| filter_projects(PROJECTS, *c).len())
            .sum();
        assert_eq!(total, PROJECTS.len());

        for c in &Category::TABS[1..] {
            assert!(filter_projects(PROJECTS, *c).iter().all(|p| p.category == *c));
        }
    }

    #[test]
    fn labels_round_trip() {
        for c in Category::TABS {
            assert_eq!(Category::from_label(c.label()), Some(c));
        }
        assert_eq!(Category::from_label("Sculpture"), None);
        assert_eq!(Category::default(), Category::All);
    }
}
