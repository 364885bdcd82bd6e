pub mod hit_testing;

pub use hit_testing::{element_contains, hit_test, rotate_point, rotated_corners};
