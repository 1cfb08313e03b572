//! Rendered markup of a widget.
//!
//! A [`Scene`] is a tree of rectangular hit regions. Adapters build one from
//! the widget state; the runtime paints it into a ratatui buffer, hit-tests
//! mouse clicks against it and queries it by test id.
//!
//! Clicks bubble from the innermost region towards the root. Every region on
//! the way contributes its [`Intent`]; a region marked `stop_propagation`
//! ends the walk, which is how a click inside the message surface is kept
//! away from the backdrop's dismissal handler.

use crate::widget::Intent;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use serde::Serialize;
use std::iter;
use thiserror::Error;

/// Index of a node inside its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// The root region covering the whole viewport.
    pub const ROOT: Self = Self(0);

    /// Position in insertion (paint) order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a region is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The viewport.
    Root,
    /// The control that opens the surface.
    Trigger,
    /// The overlay behind the surface.
    Backdrop,
    /// The message surface.
    Surface,
    /// A run of text.
    Text,
    /// The control that closes the surface.
    CloseControl,
}

/// How a region treats what is already painted below it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Paint on top.
    #[default]
    None,
    /// Erase first.
    Clear,
    /// Dim what is below (terminal stand-in for a translucent overlay).
    Dim,
}

/// Visual attributes of a region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Look {
    /// Base style of the region.
    pub style: Style,
    /// Border kind, `None` for a borderless region.
    pub border: Option<BorderType>,
    /// Style of the border lines.
    pub border_style: Style,
    /// Horizontal alignment of the text.
    pub alignment: Alignment,
    /// Treatment of the content below.
    pub fill: Fill,
    /// Paint text upper-cased without changing the text content.
    pub uppercase: bool,
}

impl Look {
    /// Set the base style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Draw a border.
    #[must_use]
    pub const fn border(mut self, border: BorderType, style: Style) -> Self {
        self.border = Some(border);
        self.border_style = style;
        self
    }

    /// Set the text alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the fill mode.
    #[must_use]
    pub const fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Paint text upper-cased.
    #[must_use]
    pub const fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}

/// One region of a scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    role: Role,
    rect: Rect,
    test_id: Option<&'static str>,
    text: Option<String>,
    glyph: Option<&'static str>,
    on_click: Option<Intent>,
    stop_propagation: bool,
    focusable: bool,
    look: Look,
}

impl Node {
    /// A detached region; attach it with [`Scene::push`].
    #[must_use]
    pub const fn new(role: Role, rect: Rect) -> Self {
        Self {
            id: NodeId::ROOT,
            parent: None,
            children: Vec::new(),
            role,
            rect,
            test_id: None,
            text: None,
            glyph: None,
            on_click: None,
            stop_propagation: false,
            focusable: false,
            look: Look {
                style: Style::new(),
                border: None,
                border_style: Style::new(),
                alignment: Alignment::Left,
                fill: Fill::None,
                uppercase: false,
            },
        }
    }

    /// Stable identifier for test automation.
    #[must_use]
    pub fn with_test_id(mut self, test_id: &'static str) -> Self {
        self.test_id = Some(test_id);
        self
    }

    /// Text content of this region.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Painted symbol that is not part of the text content (an icon).
    #[must_use]
    pub fn with_glyph(mut self, glyph: &'static str) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Intent contributed when a click reaches this region.
    #[must_use]
    pub fn on_click(mut self, intent: Intent) -> Self {
        self.on_click = Some(intent);
        self
    }

    /// Keep clicks from bubbling past this region.
    #[must_use]
    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }

    /// Allow keyboard focus.
    #[must_use]
    pub fn focusable(mut self) -> Self {
        self.focusable = true;
        self
    }

    /// Set the visual attributes.
    #[must_use]
    pub fn with_look(mut self, look: Look) -> Self {
        self.look = look;
        self
    }

    /// Id inside the owning scene.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Parent region, `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Region kind.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Screen area.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Test id, if any.
    #[must_use]
    pub const fn test_id(&self) -> Option<&'static str> {
        self.test_id
    }

    /// Own text, excluding descendants.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Click intent, if any.
    #[must_use]
    pub const fn intent(&self) -> Option<Intent> {
        self.on_click
    }

    /// Whether clicks stop here.
    #[must_use]
    pub const fn stops_propagation(&self) -> bool {
        self.stop_propagation
    }

    /// Whether the region takes keyboard focus.
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        self.focusable
    }
}

/// Result of dispatching a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Innermost region under the pointer.
    pub target: Option<NodeId>,
    /// Intents collected while bubbling, innermost first.
    pub intents: Vec<Intent>,
    /// Region that stopped propagation, if any.
    pub stopped_at: Option<NodeId>,
}

/// A query that did not match exactly one region.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing matched.
    #[error("unable to find a node with {query}")]
    NotFound {
        /// Human-readable query.
        query: String,
    },
    /// More than one region matched a single-result query.
    #[error("found {count} nodes with {query}, expected exactly one")]
    Multiple {
        /// Human-readable query.
        query: String,
        /// Number of matches.
        count: usize,
    },
}

/// Serializable view of a region and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotNode {
    /// Region kind.
    pub role: Role,
    /// Test id, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    /// Own text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Screen area.
    pub bounds: Bounds,
    /// Child regions in paint order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

/// Serializable screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Tree of hit regions, stored in paint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    nodes: Vec<Node>,
    modal_root: Option<NodeId>,
}

impl Scene {
    /// A scene holding only the root region.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            nodes: vec![Node::new(Role::Root, area)],
            modal_root: None,
        }
    }

    /// Area of the root region.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.root().rect
    }

    /// The root region.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Number of regions, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a scene has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach `node` under `parent` and return its id.
    ///
    /// An unknown parent attaches to the root.
    pub fn push(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let parent = if parent.0 < self.nodes.len() {
            parent
        } else {
            NodeId::ROOT
        };
        let id = NodeId(self.nodes.len());
        node.id = id;
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Mark `id` as a modal: regions outside it become inert to focus.
    pub fn set_modal_root(&mut self, id: NodeId) {
        self.modal_root = Some(id);
    }

    /// The registered modal, if any.
    #[must_use]
    pub const fn modal_root(&self) -> Option<NodeId> {
        self.modal_root
    }

    /// Look up a region.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// All regions in paint order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Direct children of `id`.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.node(*child))
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.node(id).map(Node::id), |current| {
            self.node(*current).and_then(Node::parent)
        })
    }

    /// Whether `id` lies in the subtree rooted at `ancestor`.
    #[must_use]
    pub fn is_within(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors(id).any(|candidate| candidate == ancestor)
    }

    /// Innermost region under `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| rect_contains(node.rect, x, y))
            .map(Node::id)
    }

    /// Dispatch a click at `(x, y)`.
    #[must_use]
    pub fn dispatch_click(&self, x: u16, y: u16) -> Dispatch {
        self.hit_test(x, y)
            .map_or_else(Dispatch::default, |target| self.click_node(target))
    }

    /// Dispatch a click as if `target` had been clicked.
    #[must_use]
    pub fn click_node(&self, target: NodeId) -> Dispatch {
        let mut dispatch = Dispatch {
            target: self.node(target).map(Node::id),
            ..Dispatch::default()
        };
        for id in self.ancestors(target) {
            let Some(node) = self.node(id) else {
                break;
            };
            if let Some(intent) = node.on_click {
                dispatch.intents.push(intent);
            }
            if node.stop_propagation {
                dispatch.stopped_at = Some(id);
                break;
            }
        }
        dispatch
    }

    /// Focusable regions in order, restricted to the modal when one is open.
    #[must_use]
    pub fn focusables(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.focusable)
            .filter(|node| {
                self.modal_root
                    .is_none_or(|modal| self.is_within(modal, node.id))
            })
            .map(Node::id)
            .collect()
    }

    /// Concatenated text of `id` and its descendants, in document order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        if let Some(text) = &node.text {
            out.push_str(text);
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    /// Every region carrying `test_id`.
    #[must_use]
    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.test_id == Some(test_id))
            .collect()
    }

    /// The region carrying `test_id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Multiple`] if more than one region matches.
    pub fn query_by_test_id(&self, test_id: &str) -> Result<Option<&Node>, QueryError> {
        at_most_one(
            self.query_all_by_test_id(test_id),
            format!("test id \"{test_id}\""),
        )
    }

    /// The single region carrying `test_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] unless exactly one region matches.
    pub fn get_by_test_id(&self, test_id: &str) -> Result<&Node, QueryError> {
        let query = format!("test id \"{test_id}\"");
        at_most_one(self.query_all_by_test_id(test_id), query.clone())?
            .ok_or(QueryError::NotFound { query })
    }

    /// The single region whose own text, trimmed, equals `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] unless exactly one region matches.
    pub fn get_by_text(&self, text: &str) -> Result<&Node, QueryError> {
        let query = format!("text \"{text}\"");
        let matches = self
            .nodes
            .iter()
            .filter(|node| node.text.as_deref().map(str::trim) == Some(text))
            .collect();
        at_most_one(matches, query.clone())?.ok_or(QueryError::NotFound { query })
    }

    /// Serializable tree view rooted at the root region.
    #[must_use]
    pub fn snapshot(&self) -> SnapshotNode {
        self.snapshot_of(self.root())
    }

    fn snapshot_of(&self, node: &Node) -> SnapshotNode {
        SnapshotNode {
            role: node.role,
            test_id: node.test_id.map(str::to_string),
            text: node.text.clone(),
            bounds: node.rect.into(),
            children: self
                .children(node.id)
                .map(|child| self.snapshot_of(child))
                .collect(),
        }
    }

    /// Paint every region in order, highlighting `focused`.
    pub fn paint(&self, buf: &mut Buffer, focused: Option<NodeId>) {
        for node in &self.nodes {
            paint_node(node, buf, focused == Some(node.id));
        }
    }
}

impl Widget for &Scene {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        self.paint(buf, None);
    }
}

fn at_most_one(matches: Vec<&Node>, query: String) -> Result<Option<&Node>, QueryError> {
    match matches.as_slice() {
        [] => Ok(None),
        [single] => Ok(Some(*single)),
        many => Err(QueryError::Multiple {
            query,
            count: many.len(),
        }),
    }
}

fn paint_node(node: &Node, buf: &mut Buffer, focused: bool) {
    let area = node.rect.intersection(buf.area);
    if area.is_empty() {
        return;
    }

    let look = node.look;
    match look.fill {
        Fill::None => {}
        Fill::Clear => Clear.render(area, buf),
        Fill::Dim => buf.set_style(area, Style::new().add_modifier(Modifier::DIM)),
    }

    let mut block = Block::default().style(look.style);
    if let Some(border) = look.border {
        block = block
            .borders(Borders::ALL)
            .border_type(border)
            .border_style(look.border_style);
    }
    let inner = block.inner(area);
    block.render(area, buf);

    if let Some(content) = node.text.as_deref().or(node.glyph) {
        let content = if look.uppercase {
            content.to_uppercase()
        } else {
            content.to_string()
        };
        Paragraph::new(Line::from(content))
            .alignment(look.alignment)
            .style(look.style)
            .render(middle_row(inner), buf);
    }

    if focused {
        buf.set_style(
            inner,
            Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    }
}

const fn middle_row(area: Rect) -> Rect {
    let height = if area.height == 0 { 0 } else { 1 };
    Rect {
        x: area.x,
        y: area.y.saturating_add(area.height.saturating_sub(1) / 2),
        width: area.width,
        height,
    }
}

const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}
