#![no_main]
use libfuzzer_sys::fuzz_target;
use quorum_membrane::validate;

/// Feeds arbitrary bytes in as every numeric argument `validate` accepts,
/// over a handful of small buffers. The only contract under test is that
/// validation never panics, regardless of how malformed the arguments are.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 * 8 {
        return;
    }

    let mut words = [0i64; 6];
    for (i, word) in words.iter_mut().enumerate() {
        let start = i * 8;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&data[start..start + 8]);
        *word = i64::from_le_bytes(bytes);
    }
    let [vector_offset, object_size, source_offset, source_size, quorum_offset, target_offset] =
        words;

    let remaining = &data[48..];
    if remaining.is_empty() {
        return;
    }
    let sources_length = (remaining[0] as usize % 4) + 1;
    let source = vec![0u8; remaining.len()];
    let sources: Vec<&[u8]> = vec![&source; sources_length];
    let quorum = vec![0u8; remaining.len()];
    let target = vec![0u8; remaining.len()];

    let _ = validate(
        vector_offset,
        object_size,
        source_offset,
        source_size,
        &sources,
        quorum.len(),
        quorum_offset,
        target.len(),
        target_offset,
    );
});
