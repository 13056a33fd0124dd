//! Smoke test: verify all crates compile and basic types are accessible
//! through the facade.

#[test]
fn core_types_accessible() {
    let header = signpose::ClipHeader::new(25.0, 512, 512, "openpose_135");
    let _clip = signpose::PoseClip::new(header);
    let _frame = signpose::PoseFrame::new();
    let _item = signpose::GlossItem::new("tôi", "tôi");
    let _err = signpose::SignError::NotFound {
        word: "test".to_string(),
    };
}

#[test]
fn rest_threshold_is_subpixel() {
    // Trimming must never swallow actual signing motion, which moves
    // keypoints by whole pixels per frame.
    assert!(signpose::REST_MOTION_EPSILON > 0.0);
    assert!(signpose::REST_MOTION_EPSILON < 1.0);
}

#[test]
fn empty_concatenation_is_rejected() {
    let result = signpose::concatenate(vec![], false);
    assert!(matches!(
        result,
        Err(signpose::SignError::EmptyInput { .. })
    ));
}
