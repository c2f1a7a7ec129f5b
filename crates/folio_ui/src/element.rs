//! Element tree for the documentation widgets
//!
//! Widgets build into a slotmap-backed arena; tests and assistive
//! traversal read it back out. A node marked `hidden` stays mounted (its
//! subtree keeps whatever state it holds) but is excluded from visible
//! traversal; a node that is not built at all is unreachable entirely.

use folio_theme::ColorToken;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct NodeId;
}

/// Chevron down SVG icon
const CHEVRON_DOWN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// Sun SVG icon (shown in dark mode, inviting a switch to light)
const SUN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/></svg>"#;

/// Moon SVG icon (shown in light mode, inviting a switch to dark)
const MOON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/></svg>"#;

/// Built-in icon set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Moon,
    ChevronDown,
}

impl IconKind {
    /// The embedded SVG source for this icon
    pub fn svg_source(&self) -> &'static str {
        match self {
            IconKind::Sun => SUN_SVG,
            IconKind::Moon => MOON_SVG,
            IconKind::ChevronDown => CHEVRON_DOWN_SVG,
        }
    }
}

/// Visual properties attached to a node
///
/// Colors are token references; the design-token system supplies the
/// concrete values. `rotation_deg` and `opacity` carry the animated
/// presentation values, which have no bearing on widget state.
#[derive(Clone, Debug)]
pub struct RenderStyle {
    pub color: Option<ColorToken>,
    pub hover_color: Option<ColorToken>,
    pub opacity: f32,
    /// Fraction of natural height, 0.0 (fully collapsed) to 1.0
    pub height_factor: f32,
    pub rotation_deg: f32,
    pub underline: bool,
    pub hidden: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: None,
            hover_color: None,
            opacity: 1.0,
            height_factor: 1.0,
            rotation_deg: 0.0,
            underline: false,
            hidden: false,
            width: None,
            height: None,
        }
    }
}

/// What a node renders as
#[derive(Clone, Debug)]
pub enum ElementKind {
    Container,
    Text(String),
    Icon(IconKind),
}

/// One node in the element tree
#[derive(Clone, Debug)]
pub struct Element {
    pub kind: ElementKind,
    pub style: RenderStyle,
    pub children: SmallVec<[NodeId; 4]>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            style: RenderStyle::default(),
            children: SmallVec::new(),
        }
    }
}

/// Arena of built elements
pub struct ElementTree {
    nodes: SlotMap<NodeId, Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, element: Element) -> NodeId {
        self.nodes.insert(element)
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All text mounted under `root`, hidden subtrees included
    ///
    /// This is what stays reachable for widgets that hide rather than
    /// unmount their content (tab panels).
    pub fn mounted_text(&self, root: NodeId) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(root, false, &mut out);
        out
    }

    /// Text under `root` excluding hidden subtrees
    pub fn visible_text(&self, root: NodeId) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(root, true, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, skip_hidden: bool, out: &mut Vec<String>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if skip_hidden && node.style.hidden {
            return;
        }
        if let ElementKind::Text(ref s) = node.kind {
            out.push(s.clone());
        }
        for &child in &node.children {
            self.collect_text(child, skip_hidden, out);
        }
    }

    /// Icons under `root` excluding hidden subtrees, with their rotations
    pub fn visible_icons(&self, root: NodeId) -> Vec<(IconKind, f32)> {
        let mut out = Vec::new();
        self.collect_icons(root, &mut out);
        out
    }

    fn collect_icons(&self, id: NodeId, out: &mut Vec<(IconKind, f32)>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.style.hidden {
            return;
        }
        if let ElementKind::Icon(kind) = node.kind {
            out.push((kind, node.style.rotation_deg));
        }
        for &child in &node.children {
            self.collect_icons(child, out);
        }
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can build itself into an [`ElementTree`]
pub trait ElementBuilder {
    fn build(&self, tree: &mut ElementTree) -> NodeId;
}

/// Container builder with fluent styling
pub struct Div {
    style: RenderStyle,
    children: Vec<Box<dyn ElementBuilder>>,
}

impl Div {
    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn color(mut self, token: ColorToken) -> Self {
        self.style.color = Some(token);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn height_factor(mut self, factor: f32) -> Self {
        self.style.height_factor = factor;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.style.hidden = hidden;
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.style.width = Some(width);
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.style.height = Some(height);
        self
    }
}

impl ElementBuilder for Div {
    fn build(&self, tree: &mut ElementTree) -> NodeId {
        let mut element = Element::new(ElementKind::Container);
        element.style = self.style.clone();
        let id = tree.insert(element);
        for child in &self.children {
            let child_id = child.build(tree);
            tree.add_child(id, child_id);
        }
        id
    }
}

/// Text builder
pub struct Text {
    content: String,
    style: RenderStyle,
}

impl Text {
    pub fn color(mut self, token: ColorToken) -> Self {
        self.style.color = Some(token);
        self
    }

    pub fn hover_color(mut self, token: ColorToken) -> Self {
        self.style.hover_color = Some(token);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.style.underline = underline;
        self
    }
}

impl ElementBuilder for Text {
    fn build(&self, tree: &mut ElementTree) -> NodeId {
        let mut element = Element::new(ElementKind::Text(self.content.clone()));
        element.style = self.style.clone();
        tree.insert(element)
    }
}

/// Icon builder
pub struct Icon {
    kind: IconKind,
    style: RenderStyle,
}

impl Icon {
    pub fn color(mut self, token: ColorToken) -> Self {
        self.style.color = Some(token);
        self
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.style.rotation_deg = degrees;
        self
    }
}

impl ElementBuilder for Icon {
    fn build(&self, tree: &mut ElementTree) -> NodeId {
        let mut element = Element::new(ElementKind::Icon(self.kind));
        element.style = self.style.clone();
        tree.insert(element)
    }
}

/// Create a container element
pub fn div() -> Div {
    Div {
        style: RenderStyle::default(),
        children: Vec::new(),
    }
}

/// Create a text element
pub fn text(content: impl Into<String>) -> Text {
    Text {
        content: content.into(),
        style: RenderStyle::default(),
    }
}

/// Create an icon element
pub fn icon(kind: IconKind) -> Icon {
    Icon {
        kind,
        style: RenderStyle::default(),
    }
}
