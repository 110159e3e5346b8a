//! Filter model types (nouns)
//!
//! Dashboard filter context entries and the object references they point at.

mod attribute;
mod date;
mod item;
mod obj_ref;

pub use attribute::{AttributeElements, AttributeFilter, DateFilterLink, ParentFilterLink, ParentFilterOver, SelectionMode};
pub use date::{Bound, BoundedFilter, DateFilter, DateFilterGranularity, DateFilterType, DateFilterValue, RelativeRange};
pub use item::{selected_elements_count, FilterContextItem};
pub use obj_ref::{refs_equal, ObjRef};

pub(crate) use date::deserialize_offset;
