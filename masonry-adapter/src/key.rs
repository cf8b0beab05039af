#[cfg(feature = "std")]
pub trait GridKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> GridKey for T {}

#[cfg(not(feature = "std"))]
pub trait GridKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> GridKey for T {}
