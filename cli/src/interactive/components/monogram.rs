//! Monogram header component
//!
//! Renders the product name's initials as block art with a gradient.

use crate::interactive::palette::Palette;
use iocraft::prelude::*;

/// Glyph rows for the letters the monogram can draw
fn glyph(c: char) -> Option<[&'static str; 5]> {
    let rows = match c.to_ascii_uppercase() {
        'M' => ["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'G' => [" ███ ", "█    ", "█  ██", "█   █", " ███ "],
        'F' => ["█████", "█    ", "████ ", "█    ", "█    "],
        '.' => ["  ", "  ", "  ", "  ", "█ "],
        _ => return None,
    };
    Some(rows)
}

/// Block-art rows for the initials of `name`, or `None` if a letter has no glyph
pub fn monogram_lines(name: &str) -> Option<Vec<String>> {
    let initials: Vec<char> = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphabetic())
        .collect();
    if initials.is_empty() {
        return None;
    }

    let glyphs = initials
        .iter()
        .map(|c| glyph(*c))
        .collect::<Option<Vec<_>>>()?;

    Some(
        (0..5)
            .map(|row| {
                glyphs
                    .iter()
                    .map(|g| g[row])
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect(),
    )
}

#[derive(Default, Props)]
pub struct MonogramProps {
    pub product_name: String,
    pub palette: Palette,
}

/// Product monogram with a fading accent gradient
#[component]
pub fn Monogram(_hooks: Hooks, props: &MonogramProps) -> impl Into<AnyElement<'static>> {
    let accent = props.palette.accent;
    let lines = match monogram_lines(&props.product_name) {
        Some(lines) => lines,
        None => vec![props.product_name.clone()],
    };

    element! {
        View(key: "monogram", flex_direction: FlexDirection::Column, margin_bottom: 1) {
            #(lines.into_iter().enumerate().map(|(i, line)| {
                let dim = (i as u8).saturating_mul(12);
                element! {
                    Text(
                        content: line,
                        color: Color::Rgb {
                            r: accent.0.saturating_sub(dim),
                            g: accent.1.saturating_sub(dim),
                            b: accent.2.saturating_sub(dim),
                        },
                        weight: Weight::Bold,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
