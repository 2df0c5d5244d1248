use dioxus::prelude::*;

/// Fill style for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Outline,
}

impl BadgeVariant {
    fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Solid => "solid",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Short inline label such as a permission level.
///
/// `tone` is a color token (`red`, `purple`, `blue`, `green`, `teal`, `gray`);
/// without one the badge uses the accent color.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(into)] tone: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let tone = tone.unwrap_or_else(|| "accent".to_string());
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("data-tone", tone, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged, {children} }
    }
}
