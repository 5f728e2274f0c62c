use crate::fp::Item;
use std::collections::HashMap;

/// A prefix path leading to one node, root first, weighted by that node's count.
pub type PrefixPath<I> = (Vec<I>, usize);

#[derive(Debug, Clone)]
pub struct FPNode<I> {
    pub item: Option<I>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<I, usize>,
}

/// Arena-backed FP-tree.
///
/// Nodes refer to each other by index into `nodes`; the header table lists,
/// per item, every node carrying it in the order the nodes were created.
/// Dropping the tree frees all of its nodes at once.
#[derive(Debug, Clone)]
pub struct FPTree<I> {
    pub nodes: Vec<FPNode<I>>,
    pub header_table: HashMap<I, Vec<usize>>,
    pub root_index: usize,
}

impl<I: Item> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: I, count: usize, parent: Option<usize>) -> Self {
        Self {
            item: Some(item),
            count,
            parent,
            children: HashMap::new(),
        }
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FPTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// True when no transaction has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node-link chain of `item`, empty when the item is absent.
    pub fn node_links(&self, item: &I) -> &[usize] {
        self.header_table
            .get(item)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Inserts an already ordered transaction, adding `weight` to every node
    /// along its path.
    pub fn insert_transaction(&mut self, transaction: &[I], weight: usize) {
        let mut current_index = self.root_index;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes
                    .push(FPNode::new_item(item.clone(), weight, Some(current_index)));
                self.nodes[current_index]
                    .children
                    .insert(item.clone(), new_index);
                self.header_table
                    .entry(item.clone())
                    .or_default()
                    .push(new_index);
                current_index = new_index;
            }
        }
    }

    /// Sum of counts along the node-link chain of `item`.
    pub fn item_support(&self, item: &I) -> usize {
        self.node_links(item)
            .iter()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Conditional pattern base of `item`.
    ///
    /// Nodes hanging directly off the root have no prefix and are left out.
    pub fn get_prefix_paths(&self, item: &I) -> Vec<PrefixPath<I>> {
        self.node_links(item)
            .iter()
            .filter_map(|&idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    if let Some(item) = &self.nodes[i].item {
                        path.push(item.clone());
                    }
                    current = self.nodes[i].parent;
                }

                path.reverse();
                (!path.is_empty()).then_some((path, self.nodes[idx].count))
            })
            .collect()
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let children = &self.nodes[current_index].children;
            match children.len() {
                0 => return true,
                1 => {
                    current_index = match children.values().next() {
                        Some(&child) => child,
                        None => return true,
                    }
                }
                _ => return false,
            }
        }
    }

    /// `(item, count)` pairs from the root down the first-child chain.
    ///
    /// Only meaningful when [`has_single_path`](Self::has_single_path) holds.
    pub fn get_single_path(&self) -> Vec<(I, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.count));
            }
            current_index = child_index;
        }

        path
    }
}
