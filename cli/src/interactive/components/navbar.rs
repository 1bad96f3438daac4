//! Navigation bar component
//!
//! Shows every registered route in order. The active route uses its
//! filled icon; while leaving, the pending route is marked as well.

use crate::interactive::palette::{rgb, Palette};
use folio_core::RouteTable;
use iocraft::prelude::*;

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub icon_fill: String,
}

impl NavItem {
    /// Items for every route, in registration order
    pub fn from_routes<V>(routes: &RouteTable<V>) -> Vec<NavItem> {
        routes
            .iter()
            .map(|route| NavItem {
                key: route.key.to_string(),
                name: route.name.clone(),
                icon: route.meta.icon.clone().unwrap_or_else(|| "·".to_string()),
                icon_fill: route
                    .meta
                    .icon_fill
                    .clone()
                    .unwrap_or_else(|| "•".to_string()),
            })
            .collect()
    }
}

#[derive(Default, Props)]
pub struct NavbarProps {
    pub items: Vec<NavItem>,
    /// Route key of the active path
    pub active: String,
    /// Route key of the pending path while leaving
    pub pending: Option<String>,
    pub palette: Palette,
}

#[component]
pub fn Navbar(_hooks: Hooks, props: &NavbarProps) -> impl Into<AnyElement<'static>> {
    let palette = props.palette;

    element! {
        View(
            key: "navbar",
            flex_direction: FlexDirection::Row,
            gap: 3,
            padding_left: 1,
            padding_right: 1,
            border_style: BorderStyle::Round,
            border_color: rgb(palette.muted),
        ) {
            #(props.items.iter().enumerate().map(|(i, item)| {
                let is_active = item.key == props.active;
                let is_pending = props.pending.as_deref() == Some(item.key.as_str());
                let icon = if is_active || is_pending { &item.icon_fill } else { &item.icon };
                let color = if is_pending {
                    rgb(palette.accent)
                } else if is_active {
                    rgb(palette.foreground)
                } else {
                    rgb(palette.muted)
                };
                element! {
                    Text(
                        key: format!("nav-{}", item.key),
                        content: format!("{} {} {}", i + 1, icon, item.name),
                        color: color,
                        weight: if is_active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
