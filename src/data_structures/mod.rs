pub mod binary_heap;
pub mod element;
pub mod priority_queue;
pub mod traits;
pub mod unsorted_list;

pub use binary_heap::BinaryHeapApq;
pub use element::{Element, Handle};
pub use priority_queue::PlainQueue;
pub use traits::{AdaptablePriorityQueue, PriorityQueue};
pub use unsorted_list::UnsortedListApq;
