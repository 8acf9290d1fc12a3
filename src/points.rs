//! Point sets: the `(x, y)` claims an opening proof attests to.
//!
//! A [`PointSet`] is an ordered list of evaluation claims with pairwise
//! distinct x-coordinates. Besides building one from raw pairs, data can be
//! encoded directly: text byte-by-byte, or arbitrary bytes in fixed-size
//! chunks. The x-coordinate of a point is its position in the data, so a
//! contiguous piece of the data maps to a contiguous range of x-coordinates
//! and can be opened on its own.
//!
//! # Example
//!
//! ```rust
//! use kzg_multiopen::{FieldElement, Fr, PointSet};
//!
//! let message = PointSet::<Fr>::from_text("hi there", 0)?;
//! assert_eq!(message.len(), 8);
//! assert_eq!(message.points()[1], (Fr::from_u64(1), Fr::from_u64(u64::from(b'i'))));
//!
//! // "there" starts at byte 3 of the message.
//! let there = PointSet::<Fr>::from_text("there", 3)?;
//! assert_eq!(message.sub_range(3, 5)?, there);
//! # Ok::<(), kzg_multiopen::Error>(())
//! ```

use crate::{Error, FieldElement, ensure_distinct};

/// Largest chunk, in bytes, that [`PointSet::from_bytes`] accepts for the given field.
///
/// One byte less than the scalar width, so every chunk value is below the
/// modulus and the encoding is injective.
pub fn max_chunk_bytes<F: FieldElement>() -> usize {
    F::BYTES - 1
}

/// Ordered `(x, y)` pairs with pairwise distinct x-coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet<F: FieldElement> {
    points: Vec<(F, F)>,
}

impl<F: FieldElement> PointSet<F> {
    /// Wraps `points`, rejecting duplicate x-coordinates.
    pub fn new(points: Vec<(F, F)>) -> Result<Self, Error> {
        ensure_distinct(points.iter().map(|(x, _)| *x))?;
        Ok(Self { points })
    }

    /// One point `(offset + i, byte_i)` per byte of `text`.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`] if the last x-coordinate does not fit in a `u64`.
    pub fn from_text(text: &str, offset: u64) -> Result<Self, Error> {
        let end = u64::try_from(text.len())
            .ok()
            .and_then(|len| offset.checked_add(len))
            .ok_or_else(|| {
                Error::MalformedInput(format!(
                    "{} bytes at offset {offset} overflow the x-coordinates",
                    text.len()
                ))
            })?;
        Ok(Self {
            points: text
                .bytes()
                .zip(offset..end)
                .map(|(byte, x)| (F::from_u64(x), F::from_u64(u64::from(byte))))
                .collect(),
        })
    }

    /// Encodes `bytes` in `chunk_size`-byte chunks.
    ///
    /// `byte_offset` is the position of `bytes` within the full data; chunk `i`
    /// becomes the point `(byte_offset / chunk_size + i, chunk_i)` with the
    /// chunk read as a little-endian integer.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedInput`] if `chunk_size` is zero or above
    /// [`max_chunk_bytes`], or if `byte_offset` or `bytes.len()` is not a
    /// multiple of `chunk_size`.
    pub fn from_bytes(bytes: &[u8], byte_offset: usize, chunk_size: usize) -> Result<Self, Error> {
        let max = max_chunk_bytes::<F>();
        if chunk_size == 0 || chunk_size > max {
            return Err(Error::MalformedInput(format!(
                "chunk size must be within [1, {max}], got {chunk_size}"
            )));
        }
        if byte_offset % chunk_size != 0 {
            return Err(Error::MalformedInput(format!(
                "byte offset {byte_offset} is not a multiple of the chunk size {chunk_size}"
            )));
        }
        if bytes.len() % chunk_size != 0 {
            return Err(Error::MalformedInput(format!(
                "byte length {} is not a multiple of the chunk size {chunk_size}",
                bytes.len()
            )));
        }

        let first = (byte_offset / chunk_size) as u64;
        Ok(Self {
            points: bytes
                .chunks(chunk_size)
                .zip(first..)
                .map(|(chunk, x)| (F::from_u64(x), F::from_le_bytes_mod_order(chunk)))
                .collect(),
        })
    }

    /// The `len` points starting at index `offset`.
    pub fn sub_range(&self, offset: usize, len: usize) -> Result<Self, Error> {
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= self.points.len())
            .ok_or_else(|| {
                Error::MalformedInput(format!(
                    "range {offset}..{offset}+{len} is outside a set of {} points",
                    self.points.len()
                ))
            })?;
        Ok(Self {
            points: self.points[offset..end].to_vec(),
        })
    }

    pub fn points(&self) -> &[(F, F)] {
        &self.points
    }

    /// The x-coordinates, in order.
    pub fn xs(&self) -> Vec<F> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<F: FieldElement> AsRef<[(F, F)]> for PointSet<F> {
    fn as_ref(&self) -> &[(F, F)] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fr;

    #[test]
    fn duplicates_are_rejected() {
        let pts = vec![
            (Fr::from_u64(1), Fr::from_u64(2)),
            (Fr::from_u64(1), Fr::from_u64(3)),
        ];
        assert!(matches!(
            PointSet::new(pts),
            Err(Error::InvalidOpeningSet(_))
        ));
    }

    #[test]
    fn text_positions_follow_offset() {
        let set = PointSet::<Fr>::from_text("bob", 20).unwrap();
        assert_eq!(set.xs(), vec![Fr::from_u64(20), Fr::from_u64(21), Fr::from_u64(22)]);
        assert_eq!(set.points()[0].1, Fr::from_u64(u64::from(b'b')));
    }

    #[test]
    fn text_at_the_end_of_the_x_range() {
        assert!(matches!(
            PointSet::<Fr>::from_text("ab", u64::MAX),
            Err(Error::MalformedInput(_))
        ));
        let last = PointSet::<Fr>::from_text("z", u64::MAX - 1).unwrap();
        assert_eq!(last.xs(), vec![Fr::from_u64(u64::MAX - 1)]);
        assert!(PointSet::<Fr>::from_text("", u64::MAX).unwrap().is_empty());
    }

    #[test]
    fn chunked_bytes() {
        let data = b"123456789abcdef0";
        let ones = PointSet::<Fr>::from_bytes(data, 0, 1).unwrap();
        assert_eq!(ones.len(), 16);

        let pairs = PointSet::<Fr>::from_bytes(data, 0, 2).unwrap();
        assert_eq!(pairs.len(), 8);
        assert_eq!(
            pairs.points()[0].1,
            Fr::from_u64(u64::from(b'1') + 256 * u64::from(b'2'))
        );

        // Bytes 4..8 of the data, in 2-byte chunks, start at x = 2.
        let middle = PointSet::<Fr>::from_bytes(&data[4..8], 4, 2).unwrap();
        assert_eq!(middle, pairs.sub_range(2, 2).unwrap());
    }

    #[test]
    fn chunking_argument_checks() {
        let data = b"123456789abcdef";
        assert!(matches!(
            PointSet::<Fr>::from_bytes(data, 0, 2),
            Err(Error::MalformedInput(_))
        ));
        assert!(PointSet::<Fr>::from_bytes(data, 0, 3).is_ok());
        assert!(PointSet::<Fr>::from_bytes(&data[..3], 1, 3).is_err());
        assert!(PointSet::<Fr>::from_bytes(data, 0, 0).is_err());
        assert!(PointSet::<Fr>::from_bytes(&[0u8; 64], 0, max_chunk_bytes::<Fr>() + 1).is_err());
        assert!(PointSet::<Fr>::from_bytes(&[0xffu8; 62], 0, max_chunk_bytes::<Fr>()).is_ok());
    }

    #[test]
    fn sub_range_bounds() {
        let set = PointSet::<Fr>::from_text("hello", 0).unwrap();
        assert_eq!(set.sub_range(0, 5).unwrap(), set);
        assert!(set.sub_range(0, 0).unwrap().is_empty());
        assert!(set.sub_range(3, 3).is_err());
        assert!(set.sub_range(usize::MAX, 2).is_err());
    }
}
