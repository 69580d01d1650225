//! Set algebra: union, intersection, complement, difference, containment,
//! overlap, adjacency.

pub mod adjacent;
pub mod complement;
pub mod contains;
pub mod difference;
pub mod intersection;
pub mod overlaps;
pub mod union;

pub use adjacent::Adjacent;
pub use complement::Complement;
pub use contains::Contains;
pub use difference::Difference;
pub use intersection::Intersection;
pub use overlaps::Overlaps;
pub use union::Union;
