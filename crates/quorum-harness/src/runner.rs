//! Runs a loaded fixture through `quorum-core` and compares the outcome
//! against what the fixture expects.

use quorum_core::iterator::Layout;
use quorum_core::{decision, iterate, CoreError};

use crate::fixtures::{Expectation, FixtureCase, FixtureError};

/// The outcome of running one fixture.
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Runs `case` through `quorum_core::iterate` and checks every record
/// position (or the expected rejection) against its fixture expectation.
pub fn run_case(case: &FixtureCase) -> Result<CaseResult, FixtureError> {
    let sources = case.decode_sources()?;
    let source_refs: Vec<&[u8]> = sources.iter().map(Vec::as_slice).collect();
    let layout = Layout {
        vector_offset: case.vector_offset,
        object_size: case.object_size,
        source_size: case.source_size,
    };
    let mut quorum = vec![0u8; layout.record_count() * decision::SIZE];
    let mut target = vec![0u8; layout.source_size];

    let result = iterate(layout, &source_refs, &mut quorum, &mut target);

    let (passed, detail) = match (&result, &case.expect) {
        (Err(CoreError::CyclicReference), Expectation::CyclicReference) => {
            (true, "rejected with a cyclic reference, as expected".to_string())
        }
        (Ok(()), Expectation::CyclicReference) => (
            false,
            "expected a cyclic-reference rejection but the call succeeded".to_string(),
        ),
        (Err(err), Expectation::Decisions(_)) => {
            (false, format!("expected success but got {err}"))
        }
        (Ok(()), Expectation::Decisions(expected)) => {
            check_decisions(expected, &quorum, &target, layout.object_size)?
        }
    };

    Ok(CaseResult {
        name: case.name.clone(),
        passed,
        detail,
    })
}

fn check_decisions(
    expected: &[crate::fixtures::ExpectedDecision],
    quorum: &[u8],
    target: &[u8],
    object_size: usize,
) -> Result<(bool, String), FixtureError> {
    for (position, expected) in expected.iter().enumerate() {
        let quorum_offset = position * decision::SIZE;
        let actual = &quorum[quorum_offset..quorum_offset + decision::SIZE];
        let expected_bytes = expected.decision().to_bytes();
        if actual != expected_bytes {
            return Ok((
                false,
                format!(
                    "position {position}: expected quorum bytes {expected_bytes:?}, got {actual:?}"
                ),
            ));
        }

        let record_offset = position * object_size;
        let actual_target = &target[record_offset..record_offset + object_size];
        match expected.target_bytes()? {
            Some(expected_target) if actual_target != expected_target.as_slice() => {
                return Ok((
                    false,
                    format!("position {position}: target bytes did not match the expected record"),
                ));
            }
            None if actual_target.iter().any(|&b| b != 0) => {
                return Ok((
                    false,
                    format!("position {position}: expected an all-zero target on no quorum"),
                ));
            }
            _ => {}
        }
    }
    Ok((true, format!("{} position(s) matched", expected.len())))
}
