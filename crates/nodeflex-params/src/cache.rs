//! Memoized whole-node geometry.

use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};

use glam::DVec2;
use nodeflex_core::{NodeData, NodeSpec, ParamValue, Rect};
use rustc_hash::{FxHashMap, FxHasher};
use tracing::{debug, warn};

use crate::manager::ParameterLayoutManager;
use crate::metrics::{NodeFrame, NodeMetrics, ParameterLayoutMetrics};

struct CacheEntry {
    key: u64,
    metrics: NodeMetrics,
}

/// Node bounds, header and body geometry, cached per node id.
///
/// An entry is reused while the node's id, collapsed flag, label,
/// parameter values, spec id and position are unchanged.
#[derive(Debug)]
pub struct NodeMetricsCalculator<'a> {
    manager: ParameterLayoutManager<'a>,
    entries: FxHashMap<String, CacheEntry>,
}

impl std::fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheEntry").field("key", &self.key).finish_non_exhaustive()
    }
}

fn hash_value(value: &ParamValue, state: &mut FxHasher) {
    match value {
        ParamValue::Bool(b) => {
            0u8.hash(state);
            b.hash(state);
        }
        ParamValue::Number(n) => {
            1u8.hash(state);
            n.to_bits().hash(state);
        }
        ParamValue::Text(s) => {
            2u8.hash(state);
            s.hash(state);
        }
        ParamValue::List(values) => {
            3u8.hash(state);
            values.len().hash(state);
            for v in values {
                v.to_bits().hash(state);
            }
        }
    }
}

/// Structural key over everything that affects a node's geometry.
fn cache_key(node: &NodeData, spec: &NodeSpec, position: DVec2) -> u64 {
    let mut state = FxHasher::default();
    node.id.hash(&mut state);
    node.collapsed.hash(&mut state);
    node.label.hash(&mut state);
    node.parameters.len().hash(&mut state);
    for (name, value) in &node.parameters {
        name.hash(&mut state);
        hash_value(value, &mut state);
    }
    spec.id.hash(&mut state);
    position.x.to_bits().hash(&mut state);
    position.y.to_bits().hash(&mut state);
    state.finish()
}

/// The node's position, with non-finite components replaced by 0.
fn sanitized_position(node: &NodeData) -> DVec2 {
    if node.position.is_finite() {
        return node.position;
    }
    warn!(node = %node.id, position = ?node.position, "Non-finite node position, using 0");
    let clean = |v: f64| if v.is_finite() { v } else { 0.0 };
    DVec2::new(clean(node.position.x), clean(node.position.y))
}

fn compute(manager: &ParameterLayoutManager<'_>, node: &NodeData, spec: &NodeSpec, position: DVec2) -> NodeMetrics {
    let style = manager.style();
    let frame = NodeFrame::new(position.x, position.y, style.node_width, style.header_height);
    let header = Rect::new(frame.x, frame.y, frame.width, frame.header_height);

    if node.collapsed {
        return NodeMetrics {
            bounds: header,
            header,
            parameter_layout: ParameterLayoutMetrics::default(),
        };
    }

    let parameter_layout = manager.calculate_metrics(node, spec, frame);
    NodeMetrics {
        bounds: Rect::new(frame.x, frame.y, frame.width, parameter_layout.total_height),
        header,
        parameter_layout,
    }
}

impl<'a> NodeMetricsCalculator<'a> {
    pub fn new(manager: ParameterLayoutManager<'a>) -> Self {
        Self {
            manager,
            entries: FxHashMap::default(),
        }
    }

    pub fn manager(&self) -> &ParameterLayoutManager<'a> {
        &self.manager
    }

    /// Geometry of `node`, recomputed only when its content or position changed.
    pub fn calculate(&mut self, node: &NodeData, spec: &NodeSpec) -> &NodeMetrics {
        let position = sanitized_position(node);
        let key = cache_key(node, spec, position);
        let manager = &self.manager;

        match self.entries.entry(node.id.clone()) {
            Entry::Occupied(entry) if entry.get().key == key => {
                debug!(node = %node.id, "node metrics cache hit");
                &entry.into_mut().metrics
            }
            Entry::Occupied(entry) => {
                debug!(node = %node.id, "node metrics changed");
                let entry = entry.into_mut();
                *entry = CacheEntry {
                    key,
                    metrics: compute(manager, node, spec, position),
                };
                &entry.metrics
            }
            Entry::Vacant(entry) => {
                debug!(node = %node.id, "node metrics cache miss");
                &entry
                    .insert(CacheEntry {
                        key,
                        metrics: compute(manager, node, spec, position),
                    })
                    .metrics
            }
        }
    }

    /// Cached geometry of a node, if any.
    pub fn get(&self, node_id: &str) -> Option<&NodeMetrics> {
        self.entries.get(node_id).map(|entry| &entry.metrics)
    }

    /// Drop one node's entry. Returns whether it was cached.
    pub fn invalidate(&mut self, node_id: &str) -> bool {
        self.entries.remove(node_id).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NodeMetricsCalculator<'static> {
    fn default() -> Self {
        Self::new(ParameterLayoutManager::default())
    }
}
