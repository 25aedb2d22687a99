#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn current_offset_is_top_of_page_outside_browser() {
    assert!(current_offset().abs() < f64::EPSILON);
}
