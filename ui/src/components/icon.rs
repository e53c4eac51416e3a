use leptos::prelude::ClassAttribute;
use leptos::prelude::AriaAttributes;
use leptos::{IntoView, component, view};

/// Glyphs referenced by the listings. Drawn by the icon stylesheet from the
/// class name; nothing here knows what they look like.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Flame,
    School,
    Hospital,
    Utensils,
    Home,
    Building,
    Zap,
    Factory,
    Shield,
    FlameKindling,
    Sparkles,
    AreaChart,
    FireExtinguisher,
    AlarmSmoke,
    ShieldCheck,
    MapPin,
    Mail,
    Phone,
    Linkedin,
    FileCode,
    Instagram,
    CheckCircle,
    ArrowRight,
    ArrowLeft,
    ExternalLink,
    Menu,
    Close,
    Send,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Flame => "flame",
            Icon::School => "school",
            Icon::Hospital => "hospital",
            Icon::Utensils => "utensils",
            Icon::Home => "home",
            Icon::Building => "building-2",
            Icon::Zap => "zap",
            Icon::Factory => "factory",
            Icon::Shield => "shield",
            Icon::FlameKindling => "flame-kindling",
            Icon::Sparkles => "sparkles",
            Icon::AreaChart => "area-chart",
            Icon::FireExtinguisher => "fire-extinguisher",
            Icon::AlarmSmoke => "alarm-smoke",
            Icon::ShieldCheck => "shield-check",
            Icon::MapPin => "map-pin",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::Linkedin => "linkedin",
            Icon::FileCode => "file-code-2",
            Icon::Instagram => "instagram",
            Icon::CheckCircle => "check-circle",
            Icon::ArrowRight => "arrow-right",
            Icon::ArrowLeft => "arrow-left",
            Icon::ExternalLink => "external-link",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Send => "send",
        }
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(default = "h-4 w-4")] class: &'static str) -> impl IntoView {
    view! {
        <i class=format!("icon icon-{} inline-block {}", icon.name(), class) aria-hidden="true"></i>
    }
}
