//! Argument validation for the `calculate` entry point.
//!
//! Every bound here mirrors spec section 6's parameter contract: each
//! failure names the offending parameter and the bound it violated, the
//! same way the upstream addon's `QUORUM_GE`/`QUORUM_LE` macros do.

use quorum_core::decision;
use quorum_core::iterator::Layout;

/// A validation failure, naming the parameter and the bound it violated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("vectorOffset must be at least 0, got {value}")]
    VectorOffset { value: i64 },

    #[error("objectSize must be at least 32, got {value}")]
    ObjectSizeBelowVector { value: i64 },

    #[error("objectSize must be at least vectorOffset + 32 ({bound}), got {value}")]
    ObjectSizeBelowVectorOffset { value: i64, bound: i64 },

    #[error("sourceOffset must be at least 0, got {value}")]
    SourceOffset { value: i64 },

    #[error("sourceSize must be at least objectSize ({object_size}), got {value}")]
    SourceSizeBelowObjectSize { value: i64, object_size: i64 },

    #[error("sourceSize must be a multiple of objectSize ({object_size}), got {value}")]
    SourceSizeNotMultiple { value: i64, object_size: i64 },

    #[error("sources.length must be at least SOURCES_MIN (1), got {value}")]
    SourcesLengthTooSmall { value: usize },

    #[error("sources.length must be at most SOURCES_MAX (255), got {value}")]
    SourcesLengthTooLarge { value: usize },

    #[error(
        "source[{index}].length must be at least sourceOffset + sourceSize ({required}), got {actual}"
    )]
    SourceBufferTooSmall {
        index: usize,
        required: i64,
        actual: usize,
    },

    #[error(
        "sources must have the same length: source[{index}] has length {actual}, expected {expected}"
    )]
    SourceLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("quorumOffset must be at least 0, got {value}")]
    QuorumOffset { value: i64 },

    #[error(
        "quorum.length must be at least quorumOffset + (sourceSize / objectSize * SIZE) ({required}), got {actual}"
    )]
    QuorumBufferTooSmall { required: i64, actual: usize },

    #[error("targetOffset must be at least 0, got {value}")]
    TargetOffset { value: i64 },

    #[error("target.length must be at least targetOffset + sourceSize ({required}), got {actual}")]
    TargetBufferTooSmall { required: i64, actual: usize },
}

/// Validated arguments to `calculate`: a [`Layout`] the core will trust,
/// the per-source slices already narrowed to `[sourceOffset, sourceOffset
/// + sourceSize)`, and the validated offsets into the caller's quorum and
/// target buffers.
pub struct Validated<'a> {
    pub layout: Layout,
    pub sources: Vec<&'a [u8]>,
    pub quorum_offset: usize,
    pub target_offset: usize,
}

/// Validates every argument to `calculate` in the order spec section 6
/// lists them, returning narrowed source slices and an offset-checked
/// [`Layout`] on success.
#[allow(clippy::too_many_arguments)]
pub fn validate<'a>(
    vector_offset: i64,
    object_size: i64,
    source_offset: i64,
    source_size: i64,
    sources: &[&'a [u8]],
    quorum_len: usize,
    quorum_offset: i64,
    target_len: usize,
    target_offset: i64,
) -> Result<Validated<'a>, ValidationError> {
    if vector_offset < 0 {
        return Err(ValidationError::VectorOffset {
            value: vector_offset,
        });
    }
    if object_size < 32 {
        return Err(ValidationError::ObjectSizeBelowVector { value: object_size });
    }
    let min_object_size = vector_offset + 32;
    if object_size < min_object_size {
        return Err(ValidationError::ObjectSizeBelowVectorOffset {
            value: object_size,
            bound: min_object_size,
        });
    }
    if source_offset < 0 {
        return Err(ValidationError::SourceOffset {
            value: source_offset,
        });
    }
    if source_size < object_size {
        return Err(ValidationError::SourceSizeBelowObjectSize {
            value: source_size,
            object_size,
        });
    }
    if source_size % object_size != 0 {
        return Err(ValidationError::SourceSizeNotMultiple {
            value: source_size,
            object_size,
        });
    }

    if sources.len() < quorum_core::SOURCES_MIN {
        return Err(ValidationError::SourcesLengthTooSmall {
            value: sources.len(),
        });
    }
    if sources.len() > quorum_core::SOURCES_MAX {
        return Err(ValidationError::SourcesLengthTooLarge {
            value: sources.len(),
        });
    }

    let required_source_len = source_offset + source_size;
    let mut narrowed = Vec::with_capacity(sources.len());
    let mut expected_len = None;
    for (index, source) in sources.iter().enumerate() {
        let actual = source.len();
        if (actual as i64) < required_source_len {
            return Err(ValidationError::SourceBufferTooSmall {
                index,
                required: required_source_len,
                actual,
            });
        }
        match expected_len {
            None => expected_len = Some(actual),
            Some(expected) if expected != actual => {
                return Err(ValidationError::SourceLengthMismatch {
                    index,
                    expected,
                    actual,
                });
            }
            Some(_) => {}
        }
        let start = source_offset as usize;
        let end = start + source_size as usize;
        narrowed.push(&source[start..end]);
    }

    if quorum_offset < 0 {
        return Err(ValidationError::QuorumOffset {
            value: quorum_offset,
        });
    }
    let record_count = source_size / object_size;
    let required_quorum_len = quorum_offset + record_count * decision::SIZE as i64;
    if (quorum_len as i64) < required_quorum_len {
        return Err(ValidationError::QuorumBufferTooSmall {
            required: required_quorum_len,
            actual: quorum_len,
        });
    }

    if target_offset < 0 {
        return Err(ValidationError::TargetOffset {
            value: target_offset,
        });
    }
    let required_target_len = target_offset + source_size;
    if (target_len as i64) < required_target_len {
        return Err(ValidationError::TargetBufferTooSmall {
            required: required_target_len,
            actual: target_len,
        });
    }

    Ok(Validated {
        layout: Layout {
            vector_offset: vector_offset as usize,
            object_size: object_size as usize,
            source_size: source_size as usize,
        },
        sources: narrowed,
        quorum_offset: quorum_offset as usize,
        target_offset: target_offset as usize,
    })
}
