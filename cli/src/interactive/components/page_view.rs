//! Page body component
//!
//! Lays a page out as lines, applies the scroll offset and fades each
//! section with its own stagger delay.

use crate::interactive::animation::{faded, PageFade, UiAnimationConfig};
use crate::interactive::palette::Palette;
use crate::site::Page;
use iocraft::prelude::*;
use std::sync::Arc;

/// A laid-out line of the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLine {
    pub text: String,
    /// Stagger slot; 0 is the heading block
    pub slot: usize,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Intro,
    SectionTitle { focused: bool },
    Body,
    Blank,
}

/// Flatten a page into lines, marking the section named by `focus`
pub fn layout(page: &Page, focus: Option<&str>) -> Vec<PageLine> {
    let mut lines = vec![
        PageLine {
            text: page.heading.clone(),
            slot: 0,
            kind: LineKind::Heading,
        },
        PageLine {
            text: page.intro.clone(),
            slot: 0,
            kind: LineKind::Intro,
        },
    ];

    for (i, section) in page.sections.iter().enumerate() {
        let slot = i + 1;
        let focused = focus == Some(section.id.as_str());
        lines.push(PageLine {
            text: String::new(),
            slot,
            kind: LineKind::Blank,
        });
        lines.push(PageLine {
            text: if focused {
                format!("▸ {}", section.title)
            } else {
                section.title.clone()
            },
            slot,
            kind: LineKind::SectionTitle { focused },
        });
        lines.extend(section.lines.iter().map(|text| PageLine {
            text: format!("  {}", text),
            slot,
            kind: LineKind::Body,
        }));
    }

    lines
}

#[derive(Default, Props)]
pub struct PageViewProps {
    pub page: Option<Arc<Page>>,
    /// Load failure to show instead of the page
    pub error: Option<String>,
    /// Section id taken from the path parameter
    pub focus: Option<String>,
    pub scroll: usize,
    pub fade: Option<PageFade>,
    pub animation: UiAnimationConfig,
    pub palette: Palette,
}

#[component]
pub fn PageView(_hooks: Hooks, props: &PageViewProps) -> impl Into<AnyElement<'static>> {
    let palette = props.palette;

    if let Some(error) = &props.error {
        return element! {
            View(key: "page-error", padding: 1) {
                Text(content: error.clone(), color: Color::Red)
            }
        };
    }

    let Some(page) = &props.page else {
        return element! {
            View(key: "page-loading", padding: 1) {
                Text(content: "Loading…", color: faded(palette.muted, palette.background, 1.0))
            }
        };
    };

    let fade = props.fade.unwrap_or_else(PageFade::settled);
    let easing = props.animation.easing;
    let stagger = props.animation.stagger;

    element! {
        View(key: "page-view", flex_direction: FlexDirection::Column, padding_left: 2, padding_right: 2) {
            #(layout(page, props.focus.as_deref()).into_iter().enumerate().skip(props.scroll).map(|(i, line)| {
                let opacity = fade.opacity(easing, stagger, line.slot);
                let (base, weight) = match line.kind {
                    LineKind::Heading => (palette.accent, Weight::Bold),
                    LineKind::SectionTitle { focused: true } => (palette.accent, Weight::Bold),
                    LineKind::SectionTitle { focused: false } => (palette.foreground, Weight::Bold),
                    LineKind::Intro => (palette.muted, Weight::Normal),
                    LineKind::Body | LineKind::Blank => (palette.foreground, Weight::Normal),
                };
                element! {
                    Text(
                        key: format!("line-{}", i),
                        content: line.text,
                        color: faded(base, palette.background, opacity),
                        weight: weight,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Section;

    fn page() -> Page {
        Page {
            heading: "Projects".to_string(),
            intro: "Selected work.".to_string(),
            sections: vec![
                Section {
                    id: "1".to_string(),
                    title: "Portfolio".to_string(),
                    lines: vec!["A site.".to_string()],
                },
                Section {
                    id: "2".to_string(),
                    title: "Palette".to_string(),
                    lines: vec!["A tool.".to_string(), "Themes.".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_layout_matches_line_count() {
        let page = page();
        assert_eq!(layout(&page, None).len(), page.line_count());
    }

    #[test]
    fn test_focused_section_is_marked() {
        let lines = layout(&page(), Some("2"));
        let focused: Vec<_> = lines
            .iter()
            .filter(|l| l.kind == LineKind::SectionTitle { focused: true })
            .collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].text, "▸ Palette");
        assert_eq!(focused[0].slot, 2);
    }
}
