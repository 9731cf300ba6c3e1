use std::f32::consts::FRAC_PI_2;

use gamemath::{vec2f, Aabb, Circle, Mat3, Vec2};

const ROTATION_ANGLE: f32 = FRAC_PI_2;
const DEMO_POS: (f32, f32) = (3.0, 4.0);

fn demo_vectors() -> Vec2 {
  let pos = Vec2::from_tuple(DEMO_POS);
  println!("pos = {}", pos);
  println!("length(pos) = {}\n", pos.length());
  pos
}

fn demo_rotation(pos: Vec2) {
  let rot = Mat3::rotation(ROTATION_ANGLE);
  log::debug!("rotation matrix: {}", rot);
  let rotated = rot * pos;
  println!("Rotated pos ≈ ({}, {})\n", rotated.x, rotated.y);
}

fn demo_collision() {
  let box1 = Aabb::new(vec2f!(0.0, 0.0), vec2f!(10.0, 10.0));
  let box2 = Aabb::new(vec2f!(5.0, 5.0), vec2f!(15.0, 15.0));
  log::debug!("box1: {:?}, box2: {:?}", box1, box2);
  println!("AABB intersection: {}", Aabb::intersects(&box1, &box2));

  let c1 = Circle::new(vec2f!(0.0, 0.0), 5.0);
  let c2 = Circle::new(vec2f!(8.0, 0.0), 5.0);
  log::debug!("c1: {:?}, c2: {:?}", c1, c2);
  println!("Circle intersection: {}", Circle::intersects(&c1, &c2));
}

fn main() {
  env_logger::init();

  log::info!("vector ops");
  let pos = demo_vectors();
  log::info!("matrix transforms");
  demo_rotation(pos);
  log::info!("collision checks");
  demo_collision();
}
