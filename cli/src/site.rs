//! Portfolio pages and the route table that serves them
//!
//! Page content ships inside the binary as JSON and is parsed the first
//! time a route is shown.

use anyhow::{Context, Result};
use folio_core::error::ViewError;
use folio_core::{RouteDescriptor, RouteTable, SiteConfig, ViewLoader};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Route whose sections are addressed by `projects/<id>`
pub const PROJECTS_KEY: &str = "projects";

/// A rendered portfolio page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub heading: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A titled block of lines inside a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Page {
    /// Section whose id matches the path parameter
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Number of text lines the page renders, used to bound scrolling
    pub fn line_count(&self) -> usize {
        2 + self
            .sections
            .iter()
            .map(|s| 2 + s.lines.len())
            .sum::<usize>()
    }
}

struct PageSource {
    key: &'static str,
    name: &'static str,
    title: &'static str,
    icon: &'static str,
    icon_fill: &'static str,
    json: &'static str,
}

const PAGES: &[PageSource] = &[
    PageSource {
        key: "home",
        name: "Home",
        title: "Home",
        icon: "○",
        icon_fill: "●",
        json: include_str!("../content/home.json"),
    },
    PageSource {
        key: PROJECTS_KEY,
        name: "Projects",
        title: "Projects",
        icon: "□",
        icon_fill: "■",
        json: include_str!("../content/projects.json"),
    },
    PageSource {
        key: "resume",
        name: "Resume",
        title: "Resume",
        icon: "◇",
        icon_fill: "◆",
        json: include_str!("../content/resume.json"),
    },
    PageSource {
        key: "contact",
        name: "Contact",
        title: "Contact",
        icon: "△",
        icon_fill: "▲",
        json: include_str!("../content/contact.json"),
    },
];

fn page_loader(key: &'static str, json: &'static str) -> ViewLoader<Page> {
    ViewLoader::new(move || async move {
        serde_json::from_str::<Page>(json).map_err(|e| {
            folio_core::Error::from(ViewError::LoadFailed {
                route: key.to_string(),
                message: e.to_string(),
            })
        })
    })
}

/// Build the portfolio route table, honoring the configured default route
pub fn route_table(config: &SiteConfig) -> Result<Arc<RouteTable<Page>>> {
    let mut builder = RouteTable::builder();

    for page in PAGES {
        let mut descriptor =
            RouteDescriptor::new(page.key, page.name, page_loader(page.key, page.json))
                .with_title(page.title)
                .with_icons(page.icon, page.icon_fill);
        if page.key == config.default_route {
            descriptor = descriptor.as_default();
        }
        builder = builder.route(descriptor);
    }

    let table = builder
        .default_route(config.default_route.as_str())
        .build()
        .with_context(|| format!("Invalid default route '{}'", config.default_route))?;

    Ok(Arc::new(table))
}
