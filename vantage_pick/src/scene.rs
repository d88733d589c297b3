// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene traversal and nearest-hit resolution.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::{Camera, Interest, PickParams, Ray, RayHit, ray_from_pointer};

/// Read-only view of a scene graph for picking.
///
/// Nodes are application-specific handles. The tree is expected to be acyclic.
pub trait SceneTree {
    /// Node handle.
    type Node: Copy + PartialEq;

    /// Direct children of `node`, in traversal order.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Events `node` listens for.
    fn interests(&self, node: Self::Node) -> Interest;

    /// Intersect `ray` with `node`'s own geometry, excluding descendants.
    ///
    /// Nodes without geometry return `None`.
    fn hit_test(&self, node: Self::Node, ray: &Ray, params: &PickParams) -> Option<RayHit>;
}

/// The interactive object under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover<K> {
    /// Interactive node that owns the hit; events go here.
    pub object: K,
    /// Node whose geometry was struck. Either `object` or one of its descendants.
    pub part: K,
    /// Geometric details of the hit.
    pub hit: RayHit,
}

/// Find the nearest interactive hit along `ray` under any of `roots`.
///
/// Geometry inside the subtree of an interactive node is attributed to the
/// nearest interactive ancestor-or-self. Geometry outside any interactive
/// subtree is ignored. Equal distances keep the first hit in pre-order
/// traversal, visiting `roots` in the order given.
pub fn pick<T>(
    tree: &T,
    roots: impl IntoIterator<Item = T::Node>,
    ray: &Ray,
    params: &PickParams,
) -> Option<Hover<T::Node>>
where
    T: SceneTree + ?Sized,
{
    let mut best: Option<Hover<T::Node>> = None;
    let mut stack: Vec<(T::Node, Option<T::Node>)> = Vec::new();

    for root in roots {
        stack.push((root, None));
        while let Some((node, inherited)) = stack.pop() {
            let owner = if tree.interests(node).is_interactive() {
                Some(node)
            } else {
                inherited
            };

            if let Some(object) = owner
                && let Some(hit) = tree.hit_test(node, ray, params)
                && hit.distance >= 0.0
                && best.is_none_or(|b| hit.distance < b.hit.distance)
            {
                best = Some(Hover {
                    object,
                    part: node,
                    hit,
                });
            }

            stack.extend(tree.children(node).iter().rev().map(|&c| (c, owner)));
        }
    }

    best
}

/// Cast the cursor ray and pick, treating every failure as "no hit".
pub fn resolve<T, C>(
    tree: &T,
    pointer: Point,
    surface: Size,
    camera: &C,
    roots: impl IntoIterator<Item = T::Node>,
    params: &PickParams,
) -> Option<Hover<T::Node>>
where
    T: SceneTree + ?Sized,
    C: Camera + ?Sized,
{
    match ray_from_pointer(pointer, surface, camera) {
        Ok(ray) => pick(tree, roots, &ray, params),
        Err(err) => {
            tracing::trace!(%err, x = pointer.x, y = pointer.y, "no pick ray");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RayHitTest;
    use crate::shapes::Sphere;
    use alloc::vec;
    use glam::DVec3;

    struct Node {
        children: Vec<usize>,
        interests: Interest,
        sphere: Option<Sphere>,
    }

    struct Tree(Vec<Node>);

    impl SceneTree for Tree {
        type Node = usize;

        fn children(&self, node: usize) -> &[usize] {
            &self.0[node].children
        }

        fn interests(&self, node: usize) -> Interest {
            self.0[node].interests
        }

        fn hit_test(&self, node: usize, ray: &Ray, params: &PickParams) -> Option<RayHit> {
            self.0[node].sphere.and_then(|s| s.ray_hit(ray, params))
        }
    }

    fn node(children: Vec<usize>, interests: Interest, z: Option<f64>) -> Node {
        Node {
            children,
            interests,
            sphere: z.map(|z| Sphere {
                center: DVec3::new(0.0, 0.0, z),
                radius: 0.5,
            }),
        }
    }

    fn ray() -> Ray {
        Ray::new(DVec3::new(0.0, 0.0, 10.0), DVec3::NEG_Z).unwrap()
    }

    #[test]
    fn nearest_interactive_wins() {
        let tree = Tree(vec![
            node(vec![1, 2, 3], Interest::empty(), None),
            node(vec![], Interest::CLICK, Some(0.0)),
            node(vec![], Interest::MOUSE_OVER, Some(5.0)),
            // Nearest of all but not interactive.
            node(vec![], Interest::MOUSE_WHEEL, Some(8.0)),
        ]);

        let hover = pick(&tree, [0], &ray(), &PickParams::default()).unwrap();
        assert_eq!(hover.object, 2);
        assert_eq!(hover.part, 2);
        assert_eq!(hover.hit.distance, 4.5);
    }

    #[test]
    fn descendant_geometry_belongs_to_interactive_ancestor() {
        let tree = Tree(vec![
            node(vec![1], Interest::empty(), None),
            node(vec![2], Interest::DRAG, None),
            node(vec![], Interest::empty(), Some(0.0)),
        ]);

        let hover = pick(&tree, [0], &ray(), &PickParams::default()).unwrap();
        assert_eq!(hover.object, 1);
        assert_eq!(hover.part, 2);
    }

    #[test]
    fn nested_interactive_node_owns_its_own_geometry() {
        let tree = Tree(vec![
            node(vec![1], Interest::CLICK, None),
            node(vec![], Interest::CLICK, Some(0.0)),
        ]);

        let hover = pick(&tree, [0], &ray(), &PickParams::default()).unwrap();
        assert_eq!(hover.object, 1);
    }

    #[test]
    fn ties_keep_first_in_traversal_order() {
        let tree = Tree(vec![
            node(vec![], Interest::CLICK, Some(0.0)),
            node(vec![], Interest::CLICK, Some(0.0)),
        ]);

        let p = PickParams::default();
        assert_eq!(pick(&tree, [0, 1], &ray(), &p).unwrap().object, 0);
        assert_eq!(pick(&tree, [1, 0], &ray(), &p).unwrap().object, 1);
    }

    #[test]
    fn empty_scene_set_is_no_hit() {
        let tree = Tree(vec![node(vec![], Interest::CLICK, Some(0.0))]);
        assert!(pick(&tree, [], &ray(), &PickParams::default()).is_none());
    }

    #[test]
    fn scene_without_interactive_nodes_is_no_hit() {
        let tree = Tree(vec![
            node(vec![1], Interest::empty(), Some(0.0)),
            node(vec![], Interest::SELECT, Some(1.0)),
        ]);
        assert!(pick(&tree, [0], &ray(), &PickParams::default()).is_none());
    }
}
