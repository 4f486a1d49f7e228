pub trait Dot {
    fn dot(self, rhs: Self) -> f64;
}

pub fn dot<V: Dot>(v1: V, v2: V) -> f64 {
    v1.dot(v2)
}
