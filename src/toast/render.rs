// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from a descriptor to a visual tree.
//!
//! [`render`] does no drawing. It produces an immutable [`Node`] tree that
//! the Iced adapter in [`crate::ui::overlay`] turns into widgets. Keeping the
//! tree plain data means layout decisions can be tested without a renderer.

use super::animation::EntranceAnimation;
use super::descriptor::{Content, Placement, TextStyle, ToastDescriptor};
use super::geometry::ToastFrame;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{Color, Size};

/// Horizontal alignment of a column's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
}

/// Surface behind the toast content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Translucent material, used when no background color is given.
    Blur,
    Solid(Color),
}

/// Leaf glyph drawn before the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Checkmark { color: Color, trim: f32, size: f32 },
    Xmark { color: Color, trim: f32, size: f32 },
    Icon { name: String, color: Color, size: f32 },
    Image { name: String, size: f32 },
    Spinner { rotation: f32, size: f32 },
}

impl Glyph {
    #[must_use]
    pub fn size(&self) -> f32 {
        match self {
            Glyph::Checkmark { size, .. }
            | Glyph::Xmark { size, .. }
            | Glyph::Icon { size, .. }
            | Glyph::Image { size, .. }
            | Glyph::Spinner { size, .. } => *size,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub content: String,
    pub size: f32,
    pub color: Option<Color>,
    pub bold: bool,
}

/// Visual tree produced by [`render`].
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Column {
        spacing: f32,
        align: Align,
        children: Vec<Node>,
    },
    Row {
        spacing: f32,
        children: Vec<Node>,
    },
    Glyph(Glyph),
    Text(TextLine),
    Panel {
        surface: Surface,
        padding: f32,
        radius: f32,
        max_width: Option<f32>,
        max_height: Option<f32>,
        child: Box<Node>,
    },
    /// Places `child` at `top` from the host's top edge, horizontally centered.
    TopAnchored { top: f32, child: Box<Node> },
    /// Centers `child` over the host.
    Centered { child: Box<Node> },
}

impl Node {
    /// Direct children of this node.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Column { children, .. } | Node::Row { children, .. } => children,
            Node::Panel { child, .. }
            | Node::TopAnchored { child, .. }
            | Node::Centered { child } => std::slice::from_ref(child.as_ref()),
            Node::Glyph(_) | Node::Text(_) => &[],
        }
    }

    /// Depth-first search for the first glyph in the tree.
    pub fn find_glyph(&self) -> Option<&Glyph> {
        if let Node::Glyph(glyph) = self {
            return Some(glyph);
        }
        self.children().iter().find_map(Node::find_glyph)
    }

    /// All text lines in the tree, in order.
    pub fn text_lines(&self) -> Vec<&TextLine> {
        let mut lines = Vec::new();
        self.collect_text(&mut lines);
        lines
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a TextLine>) {
        if let Node::Text(line) = self {
            out.push(line);
        }
        for child in self.children() {
            child.collect_text(out);
        }
    }
}

/// Builds the visual tree for `descriptor`.
#[must_use]
pub fn render(
    descriptor: &ToastDescriptor,
    frame: &ToastFrame,
    animation: &EntranceAnimation,
) -> Node {
    match descriptor.get_placement() {
        Placement::Centered => render_centered(descriptor, animation),
        Placement::TopDrop => render_top_drop(descriptor, frame, animation),
    }
}

fn render_centered(descriptor: &ToastDescriptor, animation: &EntranceAnimation) -> Node {
    let text_only = matches!(descriptor.content(), Content::TextOnly);
    let mut children = Vec::new();

    if let Some(glyph) = glyph_for(descriptor.content(), sizing::ICON_XXL, animation) {
        children.push(Node::Glyph(glyph));
    }
    if let Some(block) = text_block(descriptor, Align::Center, typography::TITLE_MD) {
        children.push(block);
    }

    let content = Node::Column {
        spacing: spacing::MD,
        align: Align::Center,
        children,
    };

    Node::Centered {
        child: Box::new(Node::Panel {
            surface: surface_for(descriptor),
            padding: spacing::LG,
            radius: radius::LG,
            // Glyph alerts are bounded by a square, text-only ones only in width.
            max_width: Some(if text_only {
                sizing::TOAST_WIDTH
            } else {
                sizing::ALERT_MAX_SIZE
            }),
            max_height: (!text_only).then_some(sizing::ALERT_MAX_SIZE),
            child: Box::new(content),
        }),
    }
}

fn render_top_drop(
    descriptor: &ToastDescriptor,
    frame: &ToastFrame,
    animation: &EntranceAnimation,
) -> Node {
    let mut children = Vec::new();

    if let Some(glyph) = glyph_for(descriptor.content(), sizing::ICON_MD, animation) {
        children.push(Node::Glyph(glyph));
    }
    let align = if children.is_empty() {
        Align::Center
    } else {
        Align::Start
    };
    if let Some(block) = text_block(descriptor, align, typography::BODY_LG) {
        children.push(block);
    }

    let layout = frame.top_drop_layout();

    Node::TopAnchored {
        top: layout.top,
        child: Box::new(Node::Panel {
            surface: surface_for(descriptor),
            padding: spacing::SM,
            radius: radius::FULL,
            max_width: Some(sizing::TOAST_WIDTH),
            max_height: Some(layout.max_height),
            child: Box::new(Node::Row {
                spacing: spacing::SM,
                children,
            }),
        }),
    }
}

fn glyph_for(content: &Content, size: f32, animation: &EntranceAnimation) -> Option<Glyph> {
    let glyph = match content {
        Content::Complete(color) => Glyph::Checkmark {
            color: *color,
            trim: animation.trim_progress(),
            size,
        },
        Content::Error(color) => Glyph::Xmark {
            color: *color,
            trim: animation.trim_progress(),
            size,
        },
        Content::SystemIcon { name, color } => Glyph::Icon {
            name: name.clone(),
            color: *color,
            size,
        },
        Content::Image(name) => Glyph::Image {
            name: name.clone(),
            size,
        },
        Content::Loading => Glyph::Spinner {
            rotation: animation.rotation(),
            size,
        },
        Content::TextOnly => return None,
    };
    Some(glyph)
}

fn text_block(descriptor: &ToastDescriptor, align: Align, title_size: f32) -> Option<Node> {
    let title = descriptor.get_title().map(|title| {
        Node::Text(text_line(
            title,
            descriptor.get_title_style(),
            title_size,
            descriptor.is_bold_title(),
        ))
    });
    let subtitle = descriptor.get_subtitle().map(|subtitle| {
        Node::Text(text_line(
            subtitle,
            descriptor.get_subtitle_style(),
            typography::BODY,
            false,
        ))
    });

    let children: Vec<Node> = title.into_iter().chain(subtitle).collect();
    if children.is_empty() {
        return None;
    }

    Some(Node::Column {
        spacing: spacing::XXS,
        align,
        children,
    })
}

fn text_line(content: &str, style: TextStyle, default_size: f32, bold: bool) -> TextLine {
    TextLine {
        content: content.to_owned(),
        size: style.size.unwrap_or(default_size),
        color: style.color,
        bold,
    }
}

/// Size the toast for `descriptor` will take, computed from the same tokens
/// [`render`] lays it out with.
///
/// Text is assumed to fit on one line per title and subtitle.
#[must_use]
pub fn estimated_toast_size(descriptor: &ToastDescriptor) -> Size {
    let has_glyph = !matches!(descriptor.content(), Content::TextOnly);
    let line = |style: TextStyle, default_size: f32| {
        style.size.unwrap_or(default_size) * typography::LINE_HEIGHT
    };
    let text_height = |title_size: f32| {
        let title = descriptor
            .get_title()
            .map(|_| line(descriptor.get_title_style(), title_size));
        let subtitle = descriptor
            .get_subtitle()
            .map(|_| line(descriptor.get_subtitle_style(), typography::BODY));
        match (title, subtitle) {
            (Some(title), Some(subtitle)) => title + spacing::XXS + subtitle,
            (title, subtitle) => title.or(subtitle).unwrap_or(0.0),
        }
    };

    match descriptor.get_placement() {
        Placement::TopDrop => {
            let glyph = if has_glyph { sizing::ICON_MD } else { 0.0 };
            let content = glyph.max(text_height(typography::BODY_LG));
            Size::new(sizing::TOAST_WIDTH, content + 2.0 * spacing::SM)
        }
        Placement::Centered => {
            let text = text_height(typography::TITLE_MD);
            let mut content = text;
            if has_glyph {
                content += sizing::ICON_XXL;
                if descriptor.has_text() {
                    content += spacing::MD;
                }
            }
            let height = content + 2.0 * spacing::LG;
            if has_glyph {
                Size::new(sizing::ALERT_MAX_SIZE, height.min(sizing::ALERT_MAX_SIZE))
            } else {
                Size::new(sizing::TOAST_WIDTH, height)
            }
        }
    }
}

fn surface_for(descriptor: &ToastDescriptor) -> Surface {
    descriptor
        .get_background()
        .map_or(Surface::Blur, Surface::Solid)
}
