//! Various unsorted linear-algebra and logical helpers.

pub use self::psd::project_psd;
pub use self::sorted_pair::SortedPair;

mod psd;
mod sorted_pair;
