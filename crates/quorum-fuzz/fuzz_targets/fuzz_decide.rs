#![no_main]
use libfuzzer_sys::fuzz_target;
use quorum_core::iterator::{iterate, Layout};

const OBJECT_SIZE: usize = 32;

/// Feeds arbitrary bytes in as a single record position's version vectors
/// and checks two invariants: `length + repair <= sources_length`, and a
/// forked decision always zeroes the other three fields.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let sources_length = (data[0] as usize % 255) + 1;
    let data = &data[1..];
    if data.len() < sources_length * OBJECT_SIZE {
        return;
    }

    let buffers: Vec<&[u8]> = (0..sources_length)
        .map(|i| &data[i * OBJECT_SIZE..(i + 1) * OBJECT_SIZE])
        .collect();

    let layout = Layout {
        vector_offset: 0,
        object_size: OBJECT_SIZE,
        source_size: OBJECT_SIZE,
    };
    let mut quorum = [0u8; 4];
    let mut target = [0u8; OBJECT_SIZE];

    if iterate(layout, &buffers, &mut quorum, &mut target).is_err() {
        return;
    }

    let leader = quorum[0];
    let length = quorum[1];
    let repair = quorum[2];
    let forked = quorum[3];

    assert!((length as usize) + (repair as usize) <= sources_length);
    assert!((length as usize) <= sources_length);
    if forked == 1 {
        assert_eq!(leader, 0);
        assert_eq!(length, 0);
        assert_eq!(repair, 0);
    }
});
