//! Range-annotated traversal of the column tree.
//!
//! Every node covers a contiguous run of leaf positions in the flattened
//! column order. The traversal hands each node to a callback together with
//! that run, which is how a leaf finds its Width Vector slot.

use super::{Column, ColumnGroup, ColumnNode, Header};

/// Half-open run `[start, end)` of flattened leaf positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafRange {
    pub start: usize,
    pub end: usize,
}

impl LeafRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Where a node sits in the tree being transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformContext {
    pub range: LeafRange,
    /// 0 for top-level nodes
    pub depth: usize,
}

/// Rebuilds `columns` by passing every node through `f`.
///
/// Children are transformed before their group, so `f` sees a group with
/// its children already rewritten. Ranges are computed from the input tree.
pub fn transform_columns<F>(columns: Vec<ColumnNode>, mut f: F) -> Vec<ColumnNode>
where
    F: FnMut(ColumnNode, &TransformContext) -> ColumnNode,
{
    let mut next_leaf = 0;
    transform_level(columns, 0, &mut next_leaf, &mut f)
}

fn transform_level<F>(columns: Vec<ColumnNode>, depth: usize, next_leaf: &mut usize, f: &mut F) -> Vec<ColumnNode>
where
    F: FnMut(ColumnNode, &TransformContext) -> ColumnNode,
{
    columns
        .into_iter()
        .map(|node| {
            let start = *next_leaf;
            let node = match node {
                ColumnNode::Leaf(column) => {
                    *next_leaf += 1;
                    ColumnNode::Leaf(column)
                }
                ColumnNode::Group(group) => {
                    let children = transform_level(group.children, depth + 1, next_leaf, f);
                    ColumnNode::Group(ColumnGroup { children, ..group })
                }
            };

            let context = TransformContext {
                range: LeafRange {
                    start,
                    end: *next_leaf,
                },
                depth,
            };
            f(node, &context)
        })
        .collect()
}

/// Number of leaf columns under `columns`.
pub fn leaf_count(columns: &[ColumnNode]) -> usize {
    columns.iter().map(ColumnNode::leaf_count).sum()
}

/// Leaf columns in flattened (Width Vector) order.
pub fn collect_leaves(columns: &[ColumnNode]) -> Vec<&Column> {
    let mut leaves = Vec::new();
    collect_into(columns, &mut leaves);
    leaves
}

fn collect_into<'a>(columns: &'a [ColumnNode], leaves: &mut Vec<&'a Column>) {
    for node in columns {
        match node {
            ColumnNode::Leaf(column) => leaves.push(column),
            ColumnNode::Group(group) => collect_into(&group.children, leaves),
        }
    }
}

/// Header content to display for `node`: its title, or its name when the
/// title is empty.
pub fn render_header(node: &ColumnNode) -> Header {
    match node {
        ColumnNode::Leaf(column) => column.display_header(),
        ColumnNode::Group(group) if group.title.is_empty() => Header::text(group.name.as_str()),
        ColumnNode::Group(group) => group.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Vec<ColumnNode> {
        vec![
            Column::new("id", "ID").into(),
            ColumnGroup::new(
                "customer",
                "Customer",
                vec![
                    Column::new("first", "First").into(),
                    Column::new("last", "Last").into(),
                ],
            )
            .into(),
            Column::new("total", "Total").into(),
        ]
    }

    #[test]
    fn test_ranges_follow_flattened_order() {
        let mut seen = Vec::new();
        transform_columns(sample_tree(), |node, ctx| {
            seen.push((node.key().to_string(), ctx.range, ctx.depth));
            node
        });

        let range = |start, end| LeafRange { start, end };
        assert_eq!(
            seen,
            vec![
                ("id".to_string(), range(0, 1), 0),
                ("first".to_string(), range(1, 2), 1),
                ("last".to_string(), range(2, 3), 1),
                ("customer".to_string(), range(1, 3), 0),
                ("total".to_string(), range(3, 4), 0),
            ]
        );
    }

    #[test]
    fn test_group_sees_rewritten_children() {
        let output = transform_columns(sample_tree(), |node, _| match node {
            ColumnNode::Leaf(column) => ColumnNode::Leaf(column.with_width(1.0)),
            ColumnNode::Group(group) => {
                assert!(group.children.iter().all(|child| match child {
                    ColumnNode::Leaf(column) => column.width == Some(1.0),
                    ColumnNode::Group(_) => false,
                }));
                ColumnNode::Group(group)
            }
        });
        assert_eq!(leaf_count(&output), 4);
    }

    #[test]
    fn test_empty_group_has_empty_range() {
        let mut ranges = Vec::new();
        transform_columns(
            vec![ColumnGroup::new("empty", "Empty", vec![]).into(), Column::new("a", "A").into()],
            |node, ctx| {
                ranges.push(ctx.range);
                node
            },
        );
        assert!(ranges[0].is_empty());
        assert_eq!(ranges[1], LeafRange { start: 0, end: 1 });
        assert_eq!(ranges[1].len(), 1);
    }

    #[test]
    fn test_collect_leaves_in_order() {
        let tree = sample_tree();
        let keys: Vec<&str> = collect_leaves(&tree).iter().map(|column| column.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "first", "last", "total"]);
    }

    #[test]
    fn test_render_header_falls_back_to_name() {
        let plain = ColumnNode::from(Column::new("id", "ID"));
        assert_eq!(render_header(&plain), Header::text("ID"));

        let titled = ColumnNode::from(Column::new("id", "ID").with_title(Header::text("Identifier")));
        assert_eq!(render_header(&titled), Header::text("Identifier"));
    }
}
