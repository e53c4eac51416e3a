//! Copy for every page. Plain `&'static` tables, rendered as-is.

use crate::components::icon::Icon;
use crate::config;
use crate::state::gallery::Category;

pub struct Sector {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct Brand {
    pub name: &'static str,
    pub monogram: &'static str,
}

pub struct ServiceOffering {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub features: [&'static str; 5],
}

pub struct Product {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ExperienceEntry {
    pub years: &'static str,
    pub position: &'static str,
    pub company: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
}

pub struct ContactChannel {
    pub label: &'static str,
    pub icon: Icon,
    pub lines: &'static [&'static str],
    pub href: Option<&'static str>,
}

pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

pub static SECTORS: &[Sector] = &[
    Sector {
        title: "Educational Buildings",
        icon: Icon::School,
        description: "Fire alarms, evacuation plans, and drills for schools and colleges.",
    },
    Sector {
        title: "Hospitals",
        icon: Icon::Hospital,
        description: "Smoke detection and fire systems designed for healthcare safety.",
    },
    Sector {
        title: "Hotels/Restaurants",
        icon: Icon::Utensils,
        description: "Sprinklers and alarms for guest and kitchen fire safety.",
    },
    Sector {
        title: "Residential Buildings",
        icon: Icon::Home,
        description: "Home fire protection with hydrants, alarms, and extinguishers.",
    },
    Sector {
        title: "Commercial Buildings",
        icon: Icon::Building,
        description: "Integrated safety systems for offices and malls.",
    },
    Sector {
        title: "Power Plants",
        icon: Icon::Zap,
        description: "High-grade systems for fire control in critical areas.",
    },
    Sector {
        title: "Factories",
        icon: Icon::Factory,
        description: "Industrial fire protection with detectors and extinguishers.",
    },
];

pub static STATS: &[Stat] = &[
    Stat { number: "100+", label: "Projects" },
    Stat { number: "32", label: "Partners" },
    Stat { number: "3", label: "Offices" },
];

pub static BRANDS: &[Brand] = &[
    Brand { name: "Google", monogram: "G" },
    Brand { name: "Microsoft", monogram: "M" },
    Brand { name: "Amazon", monogram: "A" },
    Brand { name: "Adobe", monogram: "Ad" },
    Brand { name: "Dribbble", monogram: "Db" },
];

pub static SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        title: "Consulting Services",
        icon: Icon::Shield,
        description: "Expert fire safety consulting for all types of buildings and facilities",
        features: [
            "Fire Prevention Designs",
            "Fire Hazard Assessment Reports",
            "Planning, Estimating, Commissioning",
            "Fire Escape Plans",
            "Evacuation Drills",
        ],
    },
    ServiceOffering {
        title: "Fire Hydrant Systems",
        icon: Icon::FlameKindling,
        description: "Complete installation and maintenance of fire hydrant systems",
        features: [
            "Hydrant Valves",
            "Hose Boxes",
            "Hose Pipes",
            "Branch Pipes",
            "Regular Maintenance",
        ],
    },
    ServiceOffering {
        title: "Automatic Sprinkler Systems",
        icon: Icon::Sparkles,
        description: "Effective sprinkler systems for automatic fire suppression",
        features: [
            "Design & Installation",
            "Various Types of Sprinklers",
            "Control Valve Assemblies",
            "Maintenance & Testing",
            "Code Compliance",
        ],
    },
    ServiceOffering {
        title: "Fire Detection Systems",
        icon: Icon::AreaChart,
        description: "Advanced fire detection systems for early warning",
        features: [
            "Smoke & Heat Detectors",
            "Manual Call Points",
            "Hooters & Alarm Panels",
            "Addressable Fire Alarm Panels",
            "System Integration",
        ],
    },
];

pub static PRODUCTS: &[Product] = &[
    Product {
        title: "Fire Fighting Equipment",
        icon: Icon::FireExtinguisher,
        description: "Hydrant valves, hose reels, and fire pumps for active fire suppression.",
    },
    Product {
        title: "Detection Systems",
        icon: Icon::AlarmSmoke,
        description: "Advanced smoke detectors, hooters, and alarm panels for early warning.",
    },
    Product {
        title: "Safety Equipment",
        icon: Icon::ShieldCheck,
        description: "Extinguishers, signage, doors, and escape plans for emergency readiness.",
    },
];

pub static VALUES: &[Value] = &[
    Value {
        title: "Fire Prevention",
        description: "Designing comprehensive fire prevention systems and conducting hazard assessments",
    },
    Value {
        title: "Quality",
        description: "Delivering excellence in every project with strict adherence to safety standards",
    },
    Value {
        title: "Customer Safety",
        description: "Ensuring our clients achieve the highest levels of fire safety and protection",
    },
    Value {
        title: "Reliability",
        description: "Building solutions that protect lives and property in emergency situations",
    },
];

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        years: "2020-Present",
        position: "Freelance Designer & Developer",
        company: "Self-employed",
        description: "Working with various clients across industries to create digital products.",
    },
    ExperienceEntry {
        years: "2017-2020",
        position: "Senior UI/UX Designer",
        company: "Design Agency",
        description: "Led design teams on projects for major brands and startups.",
    },
    ExperienceEntry {
        years: "2015-2017",
        position: "Web Developer",
        company: "Tech Solutions Inc.",
        description: "Developed responsive websites and web applications for clients.",
    },
];

macro_rules! unsplash {
    ($photo:literal, $w:literal) => {
        concat!(
            "https://images.unsplash.com/photo-",
            $photo,
            "?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=",
            $w,
            "&q=80"
        )
    };
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Website",
        category: Category::WebDesign,
        image: unsplash!("1603969072881-b0fc7f3d77d7", "1470"),
        description: "A modern e-commerce platform with seamless shopping experience.",
    },
    Project {
        id: 2,
        title: "Travel App",
        category: Category::MobileApps,
        image: unsplash!("1512075135822-67cdd9dd7314", "1470"),
        description: "A mobile app for travelers to discover and book unique experiences.",
    },
    Project {
        id: 3,
        title: "Coffee Brand Identity",
        category: Category::Branding,
        image: unsplash!("1545231027-637d2f6210f8", "1450"),
        description: "Brand identity design for a premium coffee company.",
    },
    Project {
        id: 4,
        title: "Fitness Dashboard",
        category: Category::WebDesign,
        image: unsplash!("1593538312308-d4c29d8dc7f1", "1470"),
        description: "A fitness tracking dashboard with data visualization.",
    },
    Project {
        id: 5,
        title: "Restaurant App",
        category: Category::MobileApps,
        image: "/images/FoodDelivery.jpg",
        description: "A food delivery app with real-time order tracking.",
    },
    Project {
        id: 6,
        title: "Photography Studio",
        category: Category::Branding,
        image: unsplash!("1554104707-a76b270e4bbb", "1470"),
        description: "Brand identity for a professional photography studio.",
    },
    Project {
        id: 7,
        title: "News Portal",
        category: Category::WebDesign,
        image: unsplash!("1504711434969-e33886168f5c", "1470"),
        description: "A modern news portal with personalized content.",
    },
    Project {
        id: 8,
        title: "Smart Home App",
        category: Category::MobileApps,
        image: unsplash!("1588854337221-4cf9fa96059c", "1470"),
        description: "IoT app for controlling smart home devices.",
    },
    Project {
        id: 9,
        title: "Bakery Rebrand",
        category: Category::Branding,
        image: unsplash!("1509440159596-0249088772ff", "1472"),
        description: "Complete rebranding for an artisan bakery.",
    },
];

pub static CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Location",
        icon: Icon::MapPin,
        lines: &config::ADDRESS,
        href: None,
    },
    ContactChannel {
        label: "Email",
        icon: Icon::Mail,
        lines: &[config::EMAIL],
        href: Some("mailto:cfchyd@gamil.com"),
    },
    ContactChannel {
        label: "Phone",
        icon: Icon::Phone,
        lines: &[config::PHONE],
        href: Some("tel:9246199077"),
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        href: "https://linkedin.com",
    },
    SocialLink {
        label: "Dribbble",
        icon: Icon::FileCode,
        href: "https://dribbble.com",
    },
    SocialLink {
        label: "Instagram",
        icon: Icon::Instagram,
        href: "https://instagram.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const UNSPLASH: &str = "ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop";

    #[test]
    fn listing_sizes() {
        assert_eq!(SECTORS.len(), 7);
        assert_eq!(STATS.len(), 3);
        assert_eq!(BRANDS.len(), 5);
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(PRODUCTS.len(), 3);
        assert_eq!(VALUES.len(), 4);
        assert_eq!(EXPERIENCE.len(), 3);
        assert_eq!(PROJECTS.len(), 9);
    }

    #[test]
    fn project_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn remote_images_share_the_cdn_params() {
        for p in PROJECTS.iter().filter(|p| p.image.starts_with("https://")) {
            assert!(p.image.contains(UNSPLASH), "{}", p.title);
        }
    }

    #[test]
    fn contact_links_match_config() {
        let email = &CONTACT_CHANNELS[1];
        assert_eq!(email.href, Some(format!("mailto:{}", config::EMAIL).as_str()));
        let phone = &CONTACT_CHANNELS[2];
        assert_eq!(phone.href, Some(format!("tel:{}", config::PHONE).as_str()));
    }
}
