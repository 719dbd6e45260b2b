use super::OutputFormat;

/// Audio produced for one chunk, tagged with its position in the request.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub index: usize,
    pub audio: Vec<u8>,
}

/// Concatenates per-chunk audio in index order into one output stream.
///
/// Requires indices 0..N-1 present exactly once. A gap or duplicate means the
/// dispatcher broke its contract; the request fails rather than returning
/// partial audio.
pub fn assemble(results: &[SynthesisResult], format: OutputFormat) -> Result<Vec<u8>, String> {
    if results.is_empty() {
        return Err("no synthesis results to assemble".to_string());
    }
    for (position, result) in results.iter().enumerate() {
        if result.index != position {
            return Err(format!(
                "chunk sequence broken: expected index {position}, found {}",
                result.index
            ));
        }
    }

    match format {
        OutputFormat::Wav => merge_wav(results),
        // MP3 and Ogg streams concatenate at frame level; PCM is raw samples.
        _ => Ok(results.iter().fold(Vec::new(), |mut out, result| {
            out.extend_from_slice(&result.audio);
            out
        })),
    }
}

/// Merges WAV payloads into one container: keeps the first segment's header,
/// appends the data payload of every following segment, then patches the
/// RIFF and data chunk sizes.
fn merge_wav(results: &[SynthesisResult]) -> Result<Vec<u8>, String> {
    let (first_start, first_end) =
        data_range(&results[0].audio).map_err(|e| format!("chunk 0: {e}"))?;
    let mut out = results[0].audio[..first_end].to_vec();

    for result in &results[1..] {
        let (start, end) =
            data_range(&result.audio).map_err(|e| format!("chunk {}: {e}", result.index))?;
        out.extend_from_slice(&result.audio[start..end]);
    }

    let data_len = (out.len() - first_start) as u32;
    let riff_len = (out.len() - 8) as u32;
    out[4..8].copy_from_slice(&riff_len.to_le_bytes());
    out[first_start - 4..first_start].copy_from_slice(&data_len.to_le_bytes());

    Ok(out)
}

/// Byte range of the `data` chunk payload inside a RIFF/WAVE container.
fn data_range(bytes: &[u8]) -> Result<(usize, usize), String> {
    if bytes.len() < 12 || &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err("not a RIFF/WAVE container".to_string());
    }
    let mut offset = 12;
    while offset + 8 <= bytes.len() {
        let id = &bytes[offset..offset + 4];
        let size = u32::from_le_bytes([
            bytes[offset + 4],
            bytes[offset + 5],
            bytes[offset + 6],
            bytes[offset + 7],
        ]) as usize;
        let payload_start = offset + 8;
        if id == b"data" {
            let payload_end = (payload_start + size).min(bytes.len());
            return Ok((payload_start, payload_end));
        }
        // chunks are word-aligned
        offset = payload_start + size + (size & 1);
    }
    Err("no data chunk found".to_string())
}
