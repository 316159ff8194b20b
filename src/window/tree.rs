//! `WindowTree`: the arena that owns every node and drives dispatch.
//!
//! # Ownership
//!
//! Nodes live in a generational [`SlotMap`]. A node's `children` list is the
//! owning, ordered link (insertion order = draw order = dispatch order); its
//! `parent` is a plain lookup key and never keeps anything alive. Removing a
//! node removes everything it owns.
//!
//! # Dispatch
//!
//! `process_event` prunes on the node's mask, forwards to every child in
//! order, then runs the node's own `handle_event`. Handlers may synthesize
//! and dispatch further events before returning; the child list is walked by
//! index so nested dispatch never holds a borrow of it. The tree must stay
//! acyclic, which `attach_child` enforces, so recursion depth is bounded by
//! tree depth times synthesis fan-out.

use slotmap::{new_key_type, SlotMap};

use crate::config::ToolkitConfig;
use crate::error::{Result, TreeError};
use crate::event::{Event, EventMask};
use crate::render::RenderBackend;
use crate::widget::{self, Widget};

new_key_type! {
    /// Handle to a node in a [`WindowTree`]. Stale handles are detected,
    /// never reused for a different node.
    pub struct WindowId;
}

/// A node: one widget plus its tree links and aggregated mask.
#[derive(Debug)]
pub struct Node {
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: Vec<WindowId>,
    pub(crate) mask: EventMask,
    pub(crate) widget: Widget,
}

impl Node {
    /// Non-owning link to the node this one is attached to.
    pub const fn parent(&self) -> Option<WindowId> {
        self.parent
    }

    /// Owned children in dispatch order.
    pub fn children(&self) -> &[WindowId] {
        &self.children
    }

    /// Event kinds this node and its descendants receive.
    pub const fn event_mask(&self) -> EventMask {
        self.mask
    }

    /// The widget stored in this node.
    pub const fn widget(&self) -> &Widget {
        &self.widget
    }
}

/// Arena of windows and widgets.
#[derive(Debug, Default)]
pub struct WindowTree {
    nodes: SlotMap<WindowId, Node>,
    config: ToolkitConfig,
}

impl WindowTree {
    /// Create an empty tree with default configuration.
    pub fn new() -> Self {
        Self::with_config(ToolkitConfig::default())
    }

    /// Create an empty tree with custom configuration.
    pub fn with_config(config: ToolkitConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            config,
        }
    }

    /// Configuration widgets are created with.
    pub const fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a live node.
    pub fn contains(&self, id: WindowId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Add a detached root node.
    ///
    /// The widget's local subscription (if any) is set on the node only; it
    /// reaches ancestors when the node is attached.
    pub fn insert(&mut self, widget: impl Into<Widget>) -> WindowId {
        let widget = widget.into();
        let mask = widget.initial_mask();
        self.nodes.insert(Node {
            parent: None,
            children: Vec::new(),
            mask,
            widget,
        })
    }

    /// Look up a node.
    pub fn node(&self, id: WindowId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: WindowId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// The widget stored at `id`.
    pub fn widget(&self, id: WindowId) -> Option<&Widget> {
        self.nodes.get(id).map(|n| &n.widget)
    }

    /// Mutable access to the widget stored at `id`.
    ///
    /// Changing geometry through this is fine; composite widgets keep their
    /// own operations on the tree (see `set_slider_size` and friends).
    pub fn widget_mut(&mut self, id: WindowId) -> Option<&mut Widget> {
        self.nodes.get_mut(id).map(|n| &mut n.widget)
    }

    /// Parent of `id`, if attached.
    pub fn parent(&self, id: WindowId) -> Option<WindowId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Owned children of `id` in dispatch order.
    pub fn children(&self, id: WindowId) -> &[WindowId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Aggregated mask of `id` (empty for unknown ids).
    pub fn event_mask(&self, id: WindowId) -> EventMask {
        self.nodes.get(id).map_or(EventMask::empty(), |n| n.mask)
    }

    /// Append `child` to `parent`'s children and run the child's attach
    /// hook.
    ///
    /// Re-attachment is rejected: ancestor masks are never retracted, so
    /// moving a node would leave the old parent subscribed to its events.
    pub fn attach_child(&mut self, parent: WindowId, child: WindowId) -> Result<()> {
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or(TreeError::UnknownWindow(parent))?;
        if !parent_node.widget.is_container() {
            return Err(TreeError::NotAContainer(parent));
        }
        let child_node = self
            .nodes
            .get(child)
            .ok_or(TreeError::UnknownWindow(child))?;
        if child_node.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.ancestors(parent).any(|a| a == child) {
            return Err(TreeError::WouldCycle(child));
        }

        self.link_child(parent, child);
        Ok(())
    }

    /// Attach without validation. Callers guarantee both ids are live, the
    /// parent is a container and the child is a fresh root.
    pub(crate) fn link_child(&mut self, parent: WindowId, child: WindowId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        self.attach_to_parent(child, parent);
    }

    /// Record the parent link and propagate the child's subscription.
    ///
    /// Buttons subscribe themselves and every ancestor to the mouse triplet
    /// instead of propagating their own mask.
    pub(crate) fn attach_to_parent(&mut self, child: WindowId, parent: WindowId) {
        let Some(node) = self.nodes.get_mut(child) else {
            return;
        };
        node.parent = Some(parent);

        match node.widget.attach_subscription() {
            Some(mask) => {
                tracing::debug!(?child, ?parent, ?mask, "button attached");
                self.subscribe(child, mask);
            }
            None => {
                let (mask, kind) = (node.mask, node.widget.name());
                tracing::debug!(?child, ?parent, ?mask, kind, "window attached");
                self.subscribe(parent, mask);
            }
        }
    }

    /// Union `mask` into `id` and every ancestor.
    ///
    /// Masks only grow; there is no way to unsubscribe.
    pub fn subscribe(&mut self, id: WindowId, mask: EventMask) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.nodes.get_mut(node_id) else {
                break;
            };
            node.mask |= mask;
            current = node.parent;
        }
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: WindowId) -> impl Iterator<Item = WindowId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), |&current| {
            self.parent(current)
        })
    }

    /// Deliver `ev` into the subtree rooted at `id`.
    pub fn process_event(&mut self, id: WindowId, ev: &Event) {
        let Some(node) = self.nodes.get(id) else {
            tracing::trace!(?id, "event for unknown window dropped");
            return;
        };
        if !node.mask.intersects(ev.kind()) {
            tracing::trace!(?id, kind = ?ev.kind(), mask = ?node.mask, "pruned");
            return;
        }

        // Managers hand every non-scroll event to their scrollbars so the
        // buttons and slider inside can track the pointer.
        let scrollbars = match &node.widget {
            Widget::ScrollbarManager(manager) if !matches!(ev, Event::Scroll(_)) => {
                manager.scrollbars()
            }
            _ => [None, None],
        };
        for bar in scrollbars.into_iter().flatten() {
            self.process_event(bar, ev);
        }

        let mut index = 0;
        while let Some(&child) = self.nodes.get(id).and_then(|n| n.children.get(index)) {
            self.process_event(child, ev);
            index += 1;
        }

        self.handle_event(id, ev);
    }

    /// Run the node's own reaction to `ev`, without mask check or
    /// forwarding.
    pub fn handle_event(&mut self, id: WindowId, ev: &Event) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match &node.widget {
            Widget::Button(_) => widget::button::handle_event(self, id, ev),
            Widget::Slider(_) => widget::slider::handle_event(self, id, ev),
            Widget::Scrollbar(_) => widget::scrollbar::handle_event(self, id, ev),
            Widget::ScrollbarButton(_) => widget::scrollbar::handle_button_event(self, id, ev),
            Widget::ScrollbarBackground(_) => {
                widget::scrollbar::handle_background_event(self, id, ev);
            }
            Widget::Text(_) => widget::text::handle_event(self, id, ev),
            Widget::Container | Widget::Rectangle(_) | Widget::ScrollbarManager(_) => {
                let widget = node.widget.name();
                tracing::trace!(?id, widget, kind = ?ev.kind(), "no handler");
            }
        }
    }

    /// Draw the subtree rooted at `id`.
    ///
    /// Containers only compose their children; leaves draw themselves.
    pub fn draw(&self, id: WindowId, backend: &mut dyn RenderBackend) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if let Widget::ScrollbarManager(manager) = &node.widget {
            for bar in manager.scrollbars().into_iter().flatten() {
                self.draw(bar, backend);
            }
        } else {
            node.widget.draw(backend);
        }
        for &child in &node.children {
            self.draw(child, backend);
        }
    }

    /// Remove `id` and everything it owns.
    ///
    /// The node is unlinked from its parent. Ancestor masks keep whatever
    /// the removed subtree subscribed them to. Returns `false` for unknown
    /// ids.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let Some(parent) = self.nodes.get(id).map(|n| n.parent) else {
            return false;
        };
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|&c| c != id);
            if let Widget::ScrollbarManager(manager) = &mut parent.widget {
                manager.forget(id);
            }
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: WindowId) {
        let Some(node) = self.nodes.remove(id) else {
            return;
        };
        for child in node.children {
            self.remove_subtree(child);
        }
        if let Widget::ScrollbarManager(manager) = node.widget {
            for bar in manager.scrollbars().into_iter().flatten() {
                self.remove_subtree(bar);
            }
        }
    }
}
