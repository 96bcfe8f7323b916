//! Residual network with Edmonds–Karp augmentation.
//!
//! Arcs are stored in pairs: arc `i` and its reverse `i ^ 1`.

use std::collections::VecDeque;

pub(super) struct FlowNetwork {
    heads: Vec<usize>,
    residual: Vec<usize>,
    outgoing: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            heads: Vec::new(),
            residual: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
        }
    }

    /// Adds `from -> to` with `forward` capacity and `to -> from` with
    /// `backward` capacity as one residual pair. Pairs touching a node
    /// outside the network are ignored.
    pub(super) fn add_pair(&mut self, from: usize, to: usize, forward: usize, backward: usize) {
        if from >= self.outgoing.len() || to >= self.outgoing.len() {
            return;
        }
        let index = self.heads.len();
        self.heads.extend([to, from]);
        self.residual.extend([forward, backward]);
        if let Some(arcs) = self.outgoing.get_mut(from) {
            arcs.push(index);
        }
        if let Some(arcs) = self.outgoing.get_mut(to) {
            arcs.push(index + 1);
        }
    }

    /// Pushes augmenting paths from `source` to `sink` until none remain or
    /// `limit` units have been sent.
    pub(super) fn max_flow(&mut self, source: usize, sink: usize, limit: usize) -> usize {
        let mut flow = 0;
        while flow < limit {
            let Some(path) = self.augmenting_path(source, sink) else {
                break;
            };
            let bottleneck = path
                .iter()
                .filter_map(|&arc| self.residual.get(arc).copied())
                .min()
                .unwrap_or(0)
                .min(limit - flow);
            if bottleneck == 0 {
                break;
            }
            for arc in path {
                if let Some(forward) = self.residual.get_mut(arc) {
                    *forward -= bottleneck;
                }
                if let Some(reverse) = self.residual.get_mut(arc ^ 1) {
                    *reverse += bottleneck;
                }
            }
            flow += bottleneck;
        }
        flow
    }

    /// Shortest path of arcs with spare capacity, listed sink-first.
    fn augmenting_path(&self, source: usize, sink: usize) -> Option<Vec<usize>> {
        let node_count = self.outgoing.len();
        if source == sink || source >= node_count || sink >= node_count {
            return None;
        }
        let mut via: Vec<Option<usize>> = vec![None; node_count];
        let mut seen = vec![false; node_count];
        mark(&mut seen, source);
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            if node == sink {
                break;
            }
            for &arc in self.outgoing.get(node).into_iter().flatten() {
                let (Some(&head), Some(&spare)) = (self.heads.get(arc), self.residual.get(arc))
                else {
                    continue;
                };
                if spare > 0 && mark(&mut seen, head) {
                    if let Some(slot) = via.get_mut(head) {
                        *slot = Some(arc);
                    }
                    queue.push_back(head);
                }
            }
        }

        let mut path = Vec::new();
        let mut node = sink;
        while let Some(arc) = via.get(node).copied().flatten() {
            path.push(arc);
            node = self.heads.get(arc ^ 1).copied()?;
        }
        (node == source).then_some(path)
    }
}

/// Marks `node` as seen, returning `true` when it was not seen before.
fn mark(seen: &mut [bool], node: usize) -> bool {
    match seen.get_mut(node) {
        Some(flag) if !*flag => {
            *flag = true;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::FlowNetwork;

    #[test]
    fn parallel_routes_add_up() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3, plus a bottleneck-free shortcut 1 -> 2
        let mut network = FlowNetwork::new(4);
        network.add_pair(0, 1, 1, 0);
        network.add_pair(0, 2, 1, 0);
        network.add_pair(1, 3, 1, 0);
        network.add_pair(2, 3, 1, 0);
        network.add_pair(1, 2, 5, 0);
        assert_eq!(network.max_flow(0, 3, usize::MAX), 2);
    }

    #[test]
    fn limit_stops_early() {
        let mut network = FlowNetwork::new(2);
        network.add_pair(0, 1, 4, 4);
        assert_eq!(network.max_flow(0, 1, 3), 3);
    }

    #[test]
    fn disconnected_sink_carries_nothing() {
        let mut network = FlowNetwork::new(3);
        network.add_pair(0, 1, 1, 1);
        assert_eq!(network.max_flow(0, 2, usize::MAX), 0);
    }

    #[test]
    fn out_of_range_nodes_carry_nothing() {
        let mut network = FlowNetwork::new(2);
        network.add_pair(0, 5, 1, 1);
        network.add_pair(0, 1, 2, 0);
        assert_eq!(network.max_flow(0, 7, usize::MAX), 0);
        assert_eq!(network.max_flow(9, 1, usize::MAX), 0);
        assert_eq!(network.max_flow(0, 1, usize::MAX), 2);
    }

    #[test]
    fn source_equal_to_sink_carries_nothing() {
        let mut network = FlowNetwork::new(2);
        network.add_pair(0, 1, 1, 1);
        assert_eq!(network.max_flow(1, 1, usize::MAX), 0);
    }

    #[test]
    fn undirected_pairs_allow_flow_both_ways() {
        let mut network = FlowNetwork::new(3);
        network.add_pair(1, 0, 1, 1);
        network.add_pair(2, 1, 1, 1);
        assert_eq!(network.max_flow(0, 2, usize::MAX), 1);
    }
}
