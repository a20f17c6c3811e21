//! Output buffer with forward-reference markers.
//!
//! The buffer is an append-only list of chunks. A [`Marker`] is a named
//! position placeholder: [`OutputBuffer::set`] binds it to the buffer length
//! at that point, and [`OutputBuffer::reserve`] inserts a fixed-size slot
//! whose final content is produced by a transformer once the marker's offset
//! is known. This defers materialization instead of patching bytes in place.
//!
//! Invariants: a marker is set at most once, and a transformer must return
//! exactly the reserved byte count. Violations are compiler bugs, not input
//! conditions; [`OutputBuffer::evaluate`] reports them as ERROR diagnostics
//! and substitutes an empty slot so the rest of the artifact can still be
//! inspected.

use nitro_util::Handler;

/// Produces the final bytes of a reservation from the resolved offset
pub type Transformer = Box<dyn Fn(usize) -> Vec<u8>>;

/// Handle to a forward-reference position in an [`OutputBuffer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker(usize);

/// One piece of buffered output
enum Chunk {
    /// Literal bytes
    Bytes(Vec<u8>),
    /// Zero-width anchor binding a marker to this position
    Anchor(Marker),
    /// A `size`-byte slot resolved against a marker's final offset
    Reservation {
        marker: Marker,
        size: usize,
        transform: Transformer,
    },
}

/// Append-only growable output container with a marker table
#[derive(Default)]
pub struct OutputBuffer {
    chunks: Vec<Chunk>,
    markers: usize,
}

impl OutputBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new, unset marker
    pub fn marker(&mut self) -> Marker {
        let marker = Marker(self.markers);
        self.markers += 1;
        marker
    }

    /// Append raw text
    pub fn push_str(&mut self, text: &str) {
        if let Some(Chunk::Bytes(bytes)) = self.chunks.last_mut() {
            bytes.extend_from_slice(text.as_bytes());
        } else {
            self.chunks.push(Chunk::Bytes(text.as_bytes().to_vec()));
        }
    }

    /// Bind `marker` to the current buffer position
    pub fn set(&mut self, marker: Marker) {
        self.chunks.push(Chunk::Anchor(marker));
    }

    /// Reserve `size` bytes whose content is `transform(resolved_offset)`
    pub fn reserve(
        &mut self,
        marker: Marker,
        size: usize,
        transform: impl Fn(usize) -> Vec<u8> + 'static,
    ) {
        self.chunks.push(Chunk::Reservation {
            marker,
            size,
            transform: Box::new(transform),
        });
    }

    /// Resolve all markers and concatenate the chunks
    ///
    /// Two passes: the first scans the chunks accumulating byte counts
    /// (anchors are zero-width, reservations count as their declared size)
    /// and records each marker's offset; the second invokes the
    /// transformers and checks their output length.
    pub fn evaluate(self, handler: &Handler) -> Vec<u8> {
        let mut offsets: Vec<Option<usize>> = vec![None; self.markers];
        let mut position = 0usize;

        for chunk in &self.chunks {
            match chunk {
                Chunk::Bytes(bytes) => position += bytes.len(),
                Chunk::Anchor(marker) => {
                    if offsets[marker.0].is_some() {
                        handler.internal_error(format!(
                            "internal error: marker {} was set twice",
                            marker.0
                        ));
                    } else {
                        offsets[marker.0] = Some(position);
                    }
                },
                Chunk::Reservation { size, .. } => position += size,
            }
        }

        let mut output = Vec::with_capacity(position);
        for chunk in self.chunks {
            match chunk {
                Chunk::Bytes(bytes) => output.extend_from_slice(&bytes),
                Chunk::Anchor(_) => {},
                Chunk::Reservation {
                    marker,
                    size,
                    transform,
                } => match offsets[marker.0] {
                    Some(offset) => {
                        let bytes = transform(offset);
                        if bytes.len() == size {
                            output.extend_from_slice(&bytes);
                        } else {
                            handler.internal_error(format!(
                                "internal error: marker {} produced {} bytes, expected {}",
                                marker.0,
                                bytes.len(),
                                size
                            ));
                        }
                    },
                    None => {
                        handler.internal_error(format!(
                            "internal error: marker {} was used but never set",
                            marker.0
                        ));
                    },
                },
            }
        }

        output
    }
}
