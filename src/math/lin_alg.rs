use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

/**
 * 2D affine transform in row major order.
 * Points are treated as homogeneous `[x, y, 1]` column vectors, so the
 * translation lives in the last column and `(a * b) * p == a * (b * p)`:
 * the rightmost matrix is applied first.
 */
#[repr(C)]
#[derive(Debug, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Mat3 {
  a00: f32, a01: f32, a02: f32,
  a10: f32, a11: f32, a12: f32,
  a20: f32, a21: f32, a22: f32,
}
impl Mat3 {
  // util fns
  pub fn from_row_major(arr: [f32; 9]) -> Self {
    Self {
      a00: arr[0], a01: arr[1], a02: arr[2],
      a10: arr[3], a11: arr[4], a12: arr[5],
      a20: arr[6], a21: arr[7], a22: arr[8],
    }
  }
  pub fn identity() -> Self {
    Self {
      a00: 1.0, a01: 0.0, a02: 0.0,
      a10: 0.0, a11: 1.0, a12: 0.0,
      a20: 0.0, a21: 0.0, a22: 1.0,
    }
  }
  pub fn as_row_major_array(&self) -> [f32; 9] {
    [
      self.a00, self.a01, self.a02,
      self.a10, self.a11, self.a12,
      self.a20, self.a21, self.a22,
    ]
  }
  pub fn row(&self, n: usize) -> Option<[f32; 3]> {
    match n {
      0 => Some([self.a00, self.a01, self.a02]),
      1 => Some([self.a10, self.a11, self.a12]),
      2 => Some([self.a20, self.a21, self.a22]),
      _ => None
    }
  }
  pub fn col(&self, n: usize) -> Option<[f32; 3]> {
    match n {
      0 => Some([self.a00, self.a10, self.a20]),
      1 => Some([self.a01, self.a11, self.a21]),
      2 => Some([self.a02, self.a12, self.a22]),
      _ => None
    }
  }
  pub fn cell(&self, row: usize, col: usize) -> Option<f32> {
    self.row(row).and_then(|r| r.get(col).copied())
  }
  // matrix transforms
  pub fn translation(tx: f32, ty: f32) -> Self {
    Self {
      a02: tx,
      a12: ty,
      ..Self::identity()
    }
  }
  pub fn scale(sx: f32, sy: f32) -> Self {
    Self {
      a00: sx,
      a11: sy,
      ..Self::identity()
    }
  }
  /// Counter-clockwise rotation by `rad` radians.
  pub fn rotation(rad: f32) -> Self {
    let c = f32::cos(rad);
    let s = f32::sin(rad);
    Self::from_row_major([
      c, -s, 0.0,
      s, c, 0.0,
      0.0, 0.0, 1.0
    ])
  }
  pub fn multiply_mat3(&self, rhs: &Mat3) -> Mat3 {
    Mat3 {
      a00: self.a00 * rhs.a00 + self.a01 * rhs.a10 + self.a02 * rhs.a20,
      a01: self.a00 * rhs.a01 + self.a01 * rhs.a11 + self.a02 * rhs.a21,
      a02: self.a00 * rhs.a02 + self.a01 * rhs.a12 + self.a02 * rhs.a22,

      a10: self.a10 * rhs.a00 + self.a11 * rhs.a10 + self.a12 * rhs.a20,
      a11: self.a10 * rhs.a01 + self.a11 * rhs.a11 + self.a12 * rhs.a21,
      a12: self.a10 * rhs.a02 + self.a11 * rhs.a12 + self.a12 * rhs.a22,

      a20: self.a20 * rhs.a00 + self.a21 * rhs.a10 + self.a22 * rhs.a20,
      a21: self.a20 * rhs.a01 + self.a21 * rhs.a11 + self.a22 * rhs.a21,
      a22: self.a20 * rhs.a02 + self.a21 * rhs.a12 + self.a22 * rhs.a22,
    }
  }
  /// Applies the matrix to `p` as the homogeneous point `[x, y, 1]`.
  /// The resulting third coordinate is dropped without a perspective divide,
  /// which is only correct for affine matrices.
  pub fn transform_point(&self, p: Vec2) -> Vec2 {
    Vec2::new(
      self.a00 * p.x + self.a01 * p.y + self.a02,
      self.a10 * p.x + self.a11 * p.y + self.a12,
    )
  }
}
impl Default for Mat3 {
  fn default() -> Self {
    Self::identity()
  }
}
impl Mul for Mat3 {
  type Output = Mat3;
  fn mul(self, rhs: Self) -> Self::Output {
    self.multiply_mat3(&rhs)
  }
}
impl Mul<Vec2> for Mat3 {
  type Output = Vec2;
  fn mul(self, rhs: Vec2) -> Self::Output {
    self.transform_point(rhs)
  }
}
impl fmt::Display for Mat3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let a = self.as_row_major_array();
    write!(f, "Mat3: {{ ")?;
    for (r, row) in a.chunks(3).enumerate() {
      if r > 0 {
        write!(f, ", ")?;
      }
      write!(f, "[{:.4}, {:.4}, {:.4}]", row[0], row[1], row[2])?;
    }
    write!(f, " }}")
  }
}

#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Vec3 {
  pub x: f32,
  pub y: f32,
  pub z: f32,
}
impl Vec3 {
  pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

  pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
    Self { x, y, z }
  }
  pub fn from_array(arr: [f32; 3]) -> Self {
    Self { x: arr[0], y: arr[1], z: arr[2] }
  }
  pub fn as_array(&self) -> [f32; 3] {
    [self.x, self.y, self.z]
  }
  pub fn dot(&self, rhs: Vec3) -> f32 {
    self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
  }
  /// Right-handed cross product; `a.cross(b) == -b.cross(a)`.
  pub fn cross(&self, rhs: Vec3) -> Vec3 {
    Vec3::new(
      self.y * rhs.z - self.z * rhs.y,
      self.z * rhs.x - self.x * rhs.z,
      self.x * rhs.y - self.y * rhs.x
    )
  }
  pub fn length_squared(&self) -> f32 {
    self.dot(*self)
  }
  pub fn length(&self) -> f32 {
    f32::sqrt(self.length_squared())
  }
  /// Unit vector in the same direction. A vector of exactly zero length
  /// normalizes to the zero vector instead of NaN.
  pub fn normalize(&self) -> Vec3 {
    let n = self.length();
    if n == 0.0 { return Vec3::ZERO };
    *self / n
  }
  pub fn distance(a: Vec3, b: Vec3) -> f32 {
    (a - b).length()
  }
  pub fn xy(&self) -> Vec2 {
    Vec2 { x: self.x, y: self.y }
  }
}
impl Add for Vec3 {
  type Output = Vec3;
  fn add(self, rhs: Self) -> Self::Output {
    Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
  }
}
impl AddAssign for Vec3 {
  fn add_assign(&mut self, rhs: Self) {
    self.x += rhs.x;
    self.y += rhs.y;
    self.z += rhs.z;
  }
}
impl Sub for Vec3 {
  type Output = Vec3;
  fn sub(self, rhs: Self) -> Self::Output {
    Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
  }
}
impl SubAssign for Vec3 {
  fn sub_assign(&mut self, rhs: Self) {
    self.x -= rhs.x;
    self.y -= rhs.y;
    self.z -= rhs.z;
  }
}
impl Mul<f32> for Vec3 {
  type Output = Vec3;
  fn mul(self, rhs: f32) -> Self::Output {
    Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
  }
}
impl Mul<Vec3> for f32 {
  type Output = Vec3;
  fn mul(self, rhs: Vec3) -> Self::Output {
    rhs * self
  }
}
impl MulAssign<f32> for Vec3 {
  fn mul_assign(&mut self, rhs: f32) {
    self.x *= rhs;
    self.y *= rhs;
    self.z *= rhs;
  }
}
// no zero guard: dividing by 0.0 yields inf/NaN
impl Div<f32> for Vec3 {
  type Output = Vec3;
  fn div(self, rhs: f32) -> Self::Output {
    Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
  }
}
impl DivAssign<f32> for Vec3 {
  fn div_assign(&mut self, rhs: f32) {
    self.x /= rhs;
    self.y /= rhs;
    self.z /= rhs;
  }
}
impl Neg for Vec3 {
  type Output = Vec3;
  fn neg(self) -> Self::Output {
    Vec3::new(-self.x, -self.y, -self.z)
  }
}
impl From<[f32; 3]> for Vec3 {
  fn from(arr: [f32; 3]) -> Self {
    Vec3::from_array(arr)
  }
}
impl From<Vec3> for [f32; 3] {
  fn from(v: Vec3) -> Self {
    v.as_array()
  }
}
impl fmt::Display for Vec3 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {}, {})", self.x, self.y, self.z)
  }
}

#[repr(C)]
#[derive(Debug, Default, PartialEq, Clone, Copy, Pod, Zeroable)]
pub struct Vec2 { pub x: f32, pub y: f32 }
impl Vec2 {
  pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

  pub fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
  pub fn from_tuple(t: (f32, f32)) -> Self {
    Vec2 {
      x: t.0,
      y: t.1
    }
  }
  pub fn from_array(arr: [f32; 2]) -> Self {
    Self { x: arr[0], y: arr[1] }
  }
  pub fn as_array(&self) -> [f32; 2] {
    [self.x, self.y]
  }
  pub fn dot(&self, rhs: Vec2) -> f32 {
    self.x * rhs.x + self.y * rhs.y
  }
  /// Squared length, cheaper than `length` when only comparing.
  pub fn length_squared(&self) -> f32 {
    self.dot(*self)
  }
  pub fn length(&self) -> f32 {
    f32::sqrt(self.length_squared())
  }
  /// Unit vector in the same direction. A vector of exactly zero length
  /// normalizes to the zero vector instead of NaN.
  pub fn normalize(&self) -> Vec2 {
    let n = self.length();
    if n == 0.0 { return Vec2::ZERO };
    *self / n
  }
  pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
  }
}
impl Add for Vec2 {
  type Output = Vec2;
  fn add(self, rhs: Self) -> Self::Output {
    Vec2::new(self.x + rhs.x, self.y + rhs.y)
  }
}
impl AddAssign for Vec2 {
  fn add_assign(&mut self, rhs: Self) {
    self.x += rhs.x;
    self.y += rhs.y;
  }
}
impl Sub for Vec2 {
  type Output = Vec2;
  fn sub(self, rhs: Self) -> Self::Output {
    Vec2::new(self.x - rhs.x, self.y - rhs.y)
  }
}
impl SubAssign for Vec2 {
  fn sub_assign(&mut self, rhs: Self) {
    self.x -= rhs.x;
    self.y -= rhs.y;
  }
}
impl Mul<f32> for Vec2 {
  type Output = Vec2;
  fn mul(self, rhs: f32) -> Self::Output {
    Vec2::new(self.x * rhs, self.y * rhs)
  }
}
impl Mul<Vec2> for f32 {
  type Output = Vec2;
  fn mul(self, rhs: Vec2) -> Self::Output {
    rhs * self
  }
}
impl MulAssign<f32> for Vec2 {
  fn mul_assign(&mut self, rhs: f32) {
    self.x *= rhs;
    self.y *= rhs;
  }
}
impl Div<f32> for Vec2 {
  type Output = Vec2;
  fn div(self, rhs: f32) -> Self::Output {
    Vec2::new(self.x / rhs, self.y / rhs)
  }
}
impl DivAssign<f32> for Vec2 {
  fn div_assign(&mut self, rhs: f32) {
    self.x /= rhs;
    self.y /= rhs;
  }
}
impl Neg for Vec2 {
  type Output = Vec2;
  fn neg(self) -> Self::Output {
    Vec2::new(-self.x, -self.y)
  }
}
impl From<[f32; 2]> for Vec2 {
  fn from(arr: [f32; 2]) -> Self {
    Vec2::from_array(arr)
  }
}
impl From<Vec2> for [f32; 2] {
  fn from(v: Vec2) -> Self {
    v.as_array()
  }
}
impl fmt::Display for Vec2 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
