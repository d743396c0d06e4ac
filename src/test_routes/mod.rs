mod reorder;

pub use reorder::TestReorder;
