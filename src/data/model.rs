// ---------------------------------------------------------------------------
// SampleBuffer – the complete loaded file
// ---------------------------------------------------------------------------

/// The full contents of one input file, one sample per byte, in file order.
///
/// Each byte is an unsigned amplitude in `0..=255`; the sample index is the
/// byte's offset in the file. The buffer is never mutated after loading.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    samples: Vec<u8>,
    /// Source name exactly as the user supplied it (no normalization).
    source_name: String,
}

impl SampleBuffer {
    pub fn new(samples: Vec<u8>, source_name: String) -> Self {
        SampleBuffer {
            samples,
            source_name,
        }
    }

    /// Number of samples (= file length in bytes).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the file was empty. An empty buffer still plots (as nothing).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Window / plot title: the literal `"Wave: "` plus the source name.
    pub fn title(&self) -> String {
        format!("Wave: {}", self.source_name)
    }

    /// `(index, amplitude)` pairs for plotting, in file order.
    pub fn plot_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &s)| [i as f64, s as f64])
    }
}

#[cfg(test)]
mod tests {
    use super::SampleBuffer;

    #[test]
    fn points_pair_each_index_with_its_byte() {
        let buffer = SampleBuffer::new(vec![0x00, 0xFF, 0x7F, 0x01], "four.bin".to_string());
        let points: Vec<[f64; 2]> = buffer.plot_points().collect();
        assert_eq!(
            points,
            vec![[0.0, 0.0], [1.0, 255.0], [2.0, 127.0], [3.0, 1.0]]
        );
    }

    #[test]
    fn length_matches_byte_count() {
        let buffer = SampleBuffer::new(vec![9; 1000], "big.bin".to_string());
        assert_eq!(buffer.len(), 1000);
        assert_eq!(buffer.plot_points().count(), 1000);
    }

    #[test]
    fn empty_buffer_has_no_points() {
        let buffer = SampleBuffer::new(Vec::new(), "empty.bin".to_string());
        assert!(buffer.is_empty());
        assert_eq!(buffer.plot_points().count(), 0);
    }

    #[test]
    fn title_keeps_source_name_verbatim() {
        let buffer = SampleBuffer::new(vec![1], "./some/../odd path.raw".to_string());
        assert_eq!(buffer.title(), "Wave: ./some/../odd path.raw");
    }
}
