//! Inline SVG icon set (stroke icons on a 24x24 grid).

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    User,
    Phone,
    Truck,
    Mail,
    Message,
    MapPin,
    ArrowUpRight,
    ExternalLink,
    ChevronDown,
    Check,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Truck => &[
                "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
                "M15 18H9",
                "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.62l-3.48-4.35A1 1 0 0 0 17.52 8H14",
                "M5 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "M15 18a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Self::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Self::ArrowUpRight => &["M7 7h10v10", "M7 17 17 7"],
            Self::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Self::ChevronDown => &["M19 9l-7 7-7-7"],
            Self::Check => &["M20 6 9 17l-5-5"],
        }
    }
}

/// Leading icon for a form control, chosen by field name.
pub fn icon_for_field(name: &str) -> Option<IconKind> {
    match name {
        "fullName" => Some(IconKind::User),
        "phoneNumber" => Some(IconKind::Phone),
        "serviceType" => Some(IconKind::Truck),
        "email" => Some(IconKind::Mail),
        "message" => Some(IconKind::Message),
        "trackingNumber" => Some(IconKind::MapPin),
        _ => None,
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 20)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {class}")
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
