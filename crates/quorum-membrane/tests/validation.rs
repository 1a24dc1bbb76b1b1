//! Integration tests exercising `quorum_membrane::validate` through its
//! public crate-root re-export, one per validation failure mode named in
//! the `calculate` contract.

use quorum_membrane::{validate, ValidationError};

fn buffers(n: usize) -> Vec<Vec<u8>> {
    (0..n).map(|_| vec![0u8; 32]).collect()
}

#[test]
fn callback_absent_path_still_validates_bounds() {
    let sources = buffers(3);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let quorum = vec![0u8; 4];
    let target = vec![0u8; 32];
    assert!(validate(0, 32, 0, 32, &refs, quorum.len(), 0, target.len(), 0).is_ok());
}

#[test]
fn negative_source_offset_is_rejected() {
    let sources = buffers(1);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let err = validate(0, 32, -1, 32, &refs, 4, 0, 32, 0).unwrap_err();
    assert_eq!(err, ValidationError::SourceOffset { value: -1 });
}

#[test]
fn source_size_below_object_size_is_rejected() {
    let sources = buffers(1);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let err = validate(0, 32, 0, 16, &refs, 4, 0, 32, 0).unwrap_err();
    assert_eq!(
        err,
        ValidationError::SourceSizeBelowObjectSize {
            value: 16,
            object_size: 32
        }
    );
}

#[test]
fn negative_quorum_offset_is_rejected() {
    let sources = buffers(1);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let err = validate(0, 32, 0, 32, &refs, 4, -1, 32, 0).unwrap_err();
    assert_eq!(err, ValidationError::QuorumOffset { value: -1 });
}

#[test]
fn negative_target_offset_is_rejected() {
    let sources = buffers(1);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let err = validate(0, 32, 0, 32, &refs, 4, 0, 32, -1).unwrap_err();
    assert_eq!(err, ValidationError::TargetOffset { value: -1 });
}

#[test]
fn error_messages_name_the_offending_parameter() {
    let sources = buffers(1);
    let refs: Vec<&[u8]> = sources.iter().map(|s| s.as_slice()).collect();
    let err = validate(-5, 32, 0, 32, &refs, 4, 0, 32, 0).unwrap_err();
    assert!(err.to_string().contains("vectorOffset"));
}
