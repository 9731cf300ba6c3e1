use bytemuck::{Pod, Zeroable};

use super::*;

// --- --- --- --- --- --- --- //
// --- Collision Predicates --- //
// --- --- --- --- --- --- --- //

/// Axis-aligned box. `min` is expected to be component-wise `<= max`;
/// this is not checked.
#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Aabb {
  pub min: Vec2,
  pub max: Vec2,
}
impl Aabb {
  pub fn new(min: Vec2, max: Vec2) -> Self {
    Self { min, max }
  }
  /// Closed-interval overlap test: boxes sharing an edge or corner intersect.
  pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    !(a.max.x < b.min.x
      || a.min.x > b.max.x
      || a.max.y < b.min.y
      || a.min.y > b.max.y)
  }
}

#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Circle {
  pub center: Vec2,
  pub radius: f32,
}
impl Circle {
  pub fn new(center: Vec2, radius: f32) -> Self {
    Self { center, radius }
  }
  /// Touching circles intersect. Compares squared distances, no sqrt.
  pub fn intersects(a: &Circle, b: &Circle) -> bool {
    let reach = a.radius + b.radius;
    (a.center - b.center).length_squared() <= reach * reach
  }
}

#[cfg(test)]
mod physics_tests {
  use super::*;
  use crate::vec2f;

  fn aabb(x0: f32, y0: f32, x1: f32, y1: f32) -> Aabb {
    Aabb::new(vec2f!(x0, y0), vec2f!(x1, y1))
  }

  #[test]
  fn aabb_overlap() {
    let box1 = aabb(0.0, 0.0, 10.0, 10.0);
    let box2 = aabb(5.0, 5.0, 15.0, 15.0);
    let box3 = aabb(20.0, 20.0, 30.0, 30.0);
    assert!(Aabb::intersects(&box1, &box2));
    assert!(!Aabb::intersects(&box1, &box3));
  }
  #[test]
  fn aabb_touching_edges() {
    let box1 = aabb(0.0, 0.0, 10.0, 10.0);
    // shared corner
    assert!(Aabb::intersects(&box1, &aabb(10.0, 10.0, 20.0, 20.0)));
    // shared edge
    assert!(Aabb::intersects(&box1, &aabb(10.0, 0.0, 20.0, 10.0)));
    // just apart
    assert!(!Aabb::intersects(&box1, &aabb(10.01, 0.0, 20.0, 10.0)));
  }
  #[test]
  fn aabb_single_axis_overlap() {
    let box1 = aabb(0.0, 0.0, 10.0, 10.0);
    // overlaps on x only
    assert!(!Aabb::intersects(&box1, &aabb(2.0, 11.0, 8.0, 12.0)));
    // overlaps on y only
    assert!(!Aabb::intersects(&box1, &aabb(-5.0, 2.0, -1.0, 8.0)));
    // fully contained
    assert!(Aabb::intersects(&box1, &aabb(2.0, 2.0, 3.0, 3.0)));
  }
  #[test]
  fn aabb_symmetric() {
    let boxes = [
      aabb(0.0, 0.0, 10.0, 10.0),
      aabb(5.0, 5.0, 15.0, 15.0),
      aabb(20.0, 20.0, 30.0, 30.0),
      aabb(10.0, 10.0, 20.0, 20.0),
      aabb(-4.0, 3.0, 1.0, 4.0),
    ];
    for a in &boxes {
      for b in &boxes {
        assert_eq!(Aabb::intersects(a, b), Aabb::intersects(b, a));
      }
    }
  }
  #[test]
  fn circle_overlap() {
    let c1 = Circle::new(vec2f!(0.0, 0.0), 5.0);
    let c2 = Circle::new(vec2f!(8.0, 0.0), 5.0);
    let c3 = Circle::new(vec2f!(20.0, 0.0), 5.0);
    assert!(Circle::intersects(&c1, &c2));
    assert!(!Circle::intersects(&c1, &c3));
  }
  #[test]
  fn circle_touching() {
    let c1 = Circle::new(vec2f!(0.0, 0.0), 5.0);
    assert!(Circle::intersects(&c1, &Circle::new(vec2f!(10.0, 0.0), 5.0)));
    // 3-4-5 triangle, distance 5 == 2 + 3
    assert!(Circle::intersects(
      &Circle::new(vec2f!(0.0, 0.0), 2.0),
      &Circle::new(vec2f!(3.0, 4.0), 3.0),
    ));
    assert!(!Circle::intersects(&c1, &Circle::new(vec2f!(10.5, 0.0), 5.0)));
  }
  #[test]
  fn circle_symmetric() {
    let circles = [
      Circle::new(vec2f!(0.0, 0.0), 5.0),
      Circle::new(vec2f!(8.0, 0.0), 5.0),
      Circle::new(vec2f!(20.0, 0.0), 5.0),
      Circle::new(vec2f!(-3.0, 4.0), 0.0),
    ];
    for a in &circles {
      for b in &circles {
        assert_eq!(Circle::intersects(a, b), Circle::intersects(b, a));
      }
    }
  }
  #[test]
  fn aabb_inverted_bounds() {
    // min > max is not reordered; the separating test runs on the raw values
    let inverted = aabb(10.0, 10.0, 0.0, 0.0);
    let small = aabb(5.0, 5.0, 6.0, 6.0);
    assert!(!Aabb::intersects(&inverted, &small));
    assert!(!Aabb::intersects(&small, &inverted));
  }
  #[test]
  fn circle_negative_radius() {
    // the radius sum is squared, so -10 reaches as far as 10
    let c1 = Circle::new(vec2f!(0.0, 0.0), -5.0);
    let c2 = Circle::new(vec2f!(8.0, 0.0), -5.0);
    assert!(Circle::intersects(&c1, &c2));
    assert!(Circle::intersects(&c2, &c1));
    // opposite signs cancel out to a zero reach
    let c3 = Circle::new(vec2f!(8.0, 0.0), 5.0);
    assert!(!Circle::intersects(&c1, &c3));
  }
}
