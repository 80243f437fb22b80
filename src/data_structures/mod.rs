pub mod binary_heap;
pub mod bucket_map;
pub mod disjoint_set;
pub mod entry;
pub mod linked_list;
pub mod priority_queue;
pub mod sorted_array;
pub mod unsorted_array;

pub use binary_heap::BinaryHeapQueue;
pub use bucket_map::BucketQueue;
pub use disjoint_set::DisjointSet;
pub use entry::PriorityEntry;
pub use linked_list::LinkedQueue;
pub use priority_queue::PriorityQueue;
pub use sorted_array::SortedArrayQueue;
pub use unsorted_array::UnsortedArrayQueue;
