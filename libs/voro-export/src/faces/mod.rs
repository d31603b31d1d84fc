//! # Face Loop Decoding
//!
//! The tessellation engine describes a cell's faces as one flat list of runs.
//! Each run starts with a length `L` followed by `L` vertex indices that trace
//! the face boundary in the engine's winding order:
//!
//! ```text
//! [4, 0, 1, 2, 3,  3, 0, 3, 4,  0,  1, 7]
//!  └─ face 0 ────┘ └─ face 1 ─┘ └┘ └────┘
//!                               empty  single vertex
//! ```
//!
//! [`FaceLoops`] walks the list without allocating and is what the export
//! pipeline uses; [`decode`] collects owned loops.

use std::iter::FusedIterator;

use crate::error::DecodeError;

/// One decoded face: vertex indices into the cell's point list.
pub type FaceLoop = Vec<u32>;

/// Borrowing iterator over the face loops of a compact face-vertex list.
///
/// Yields each run's payload as a slice. After the first malformed run the
/// iterator yields that error once and then stops.
///
/// # Examples
/// ```
/// use voro_export::faces::face_loops;
///
/// let loops: Vec<&[u32]> = face_loops(&[0, 1, 2])
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(loops, vec![&[][..], &[2][..]]);
/// ```
#[derive(Debug, Clone)]
pub struct FaceLoops<'a> {
    list: &'a [u32],
    cursor: usize,
    run: usize,
    failed: bool,
}

impl<'a> FaceLoops<'a> {
    /// Creates an iterator positioned at the first run of `list`.
    pub fn new(list: &'a [u32]) -> Self {
        Self {
            list,
            cursor: 0,
            run: 0,
            failed: false,
        }
    }

    /// Number of runs yielded so far.
    pub fn runs_decoded(&self) -> usize {
        self.run
    }
}

impl<'a> Iterator for FaceLoops<'a> {
    type Item = Result<&'a [u32], DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.list.len() {
            return None;
        }

        let header = self.cursor;
        let declared = self.list[header] as usize;
        let start = header + 1;
        let available = self.list.len() - start;

        if declared > available {
            self.failed = true;
            return Some(Err(DecodeError::Truncated {
                run: self.run,
                offset: header,
                expected: declared,
                available,
            }));
        }

        let end = start + declared;
        self.cursor = end;
        self.run += 1;
        Some(Ok(&self.list[start..end]))
    }
}

impl FusedIterator for FaceLoops<'_> {}

/// Returns a borrowing iterator over the face loops of `list`.
pub fn face_loops(list: &[u32]) -> FaceLoops<'_> {
    FaceLoops::new(list)
}

/// Decodes a compact face-vertex list into owned face loops.
///
/// Loops come back in run order, which is the engine's face order.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] for the first run whose declared length
/// exceeds the remaining elements. Nothing past the end of `list` is read.
///
/// # Examples
/// ```
/// use voro_export::decode;
///
/// let faces = decode(&[4, 0, 1, 2, 3]).unwrap();
/// assert_eq!(faces, vec![vec![0, 1, 2, 3]]);
/// ```
pub fn decode(list: &[u32]) -> Result<Vec<FaceLoop>, DecodeError> {
    face_loops(list)
        .map(|face| face.map(<[u32]>::to_vec))
        .collect()
}

/// Counts faces without materializing them.
///
/// # Examples
/// ```
/// use voro_export::faces::face_count;
/// assert_eq!(face_count(&[3, 0, 1, 2, 0, 1, 5]).unwrap(), 3);
/// ```
pub fn face_count(list: &[u32]) -> Result<usize, DecodeError> {
    face_loops(list).try_fold(0, |count, face| face.map(|_| count + 1))
}

/// Total number of vertex references across all faces.
///
/// This is the number of vertices a cell contributes under the face-grouped
/// export contract.
pub fn loop_vertex_count(list: &[u32]) -> Result<usize, DecodeError> {
    face_loops(list).try_fold(0, |count, face| face.map(|f| count + f.len()))
}
