/// The base trait for any token a universe can intern as a value.
///
/// This establishes the minimum requirements for a value: it must be
/// cloneable, debuggable, equatable, and hashable. This is a marker trait,
/// so any type that satisfies these bounds implements `ValueToken`.
pub trait ValueToken: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueToken for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
