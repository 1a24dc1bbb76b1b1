#![no_main]
use libfuzzer_sys::fuzz_target;
use quorum_core::iterator::{iterate, Layout};

const OBJECT_SIZE: usize = 32;

/// Runs a full multi-position record stream through the iterator and
/// checks idempotence: deciding the same input twice must produce
/// byte-identical quorum and target buffers.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let sources_length = (data[0] as usize % 255) + 1;
    let record_count = (data[1] as usize % 8) + 1;
    let data = &data[2..];

    let record_size = OBJECT_SIZE;
    let source_size = record_count * record_size;
    let needed = sources_length * source_size;
    if data.len() < needed {
        return;
    }

    let buffers: Vec<&[u8]> = (0..sources_length)
        .map(|i| &data[i * source_size..(i + 1) * source_size])
        .collect();

    let layout = Layout {
        vector_offset: 0,
        object_size: record_size,
        source_size,
    };

    let mut quorum_a = vec![0u8; record_count * 4];
    let mut target_a = vec![0u8; source_size];
    let result_a = iterate(layout, &buffers, &mut quorum_a, &mut target_a);

    let mut quorum_b = vec![0u8; record_count * 4];
    let mut target_b = vec![0u8; source_size];
    let result_b = iterate(layout, &buffers, &mut quorum_b, &mut target_b);

    assert_eq!(result_a.is_err(), result_b.is_err());
    assert_eq!(quorum_a, quorum_b);
    assert_eq!(target_a, target_b);
});
