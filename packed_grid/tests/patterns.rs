//! Sizing and fill-pattern tests for PackedGrid.

use packed_grid::{GridError, PackedGrid, Word};

fn expected_size<W: Word>(rows: usize, cols: usize) -> usize {
    (rows * cols / W::BITS).max(1)
}

//
// -----------------------------------------------------------------------------
// Sizing
// -----------------------------------------------------------------------------

#[test]
fn size_tiny() {
    let grid = PackedGrid::<1, 1, u32>::new();
    assert_eq!(grid.rows(), 1);
    assert_eq!(grid.cols(), 1);
    assert_eq!(grid.size(), 1);
}

#[test]
fn size_tiny_default_word() {
    let grid = PackedGrid::<1, 1>::new();
    assert_eq!(grid.size(), 1);
    assert_eq!(grid.storage_len(), 1);
}

#[test]
fn size_small() {
    let grid = PackedGrid::<4, 4, u32>::new();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 4);
    assert_eq!(grid.size(), expected_size::<u32>(4, 4));
    assert_eq!(grid.size(), 1);
}

#[test]
fn size_medium() {
    let grid = PackedGrid::<16, 16, u32>::new();
    assert_eq!(grid.rows(), 16);
    assert_eq!(grid.cols(), 16);
    assert_eq!(grid.size(), expected_size::<u32>(16, 16));
    assert_eq!(grid.size(), 8);
}

#[test]
fn size_large() {
    let grid = PackedGrid::<1024, 768, u32>::new();
    assert_eq!(grid.rows(), 1024);
    assert_eq!(grid.cols(), 768);
    assert_eq!(grid.size(), expected_size::<u32>(1024, 768));
    assert_eq!(grid.size(), 24_576);
}

#[test]
fn size_large_u64() {
    let grid = PackedGrid::<768, 1024, u64>::new();
    assert_eq!(grid.rows(), 768);
    assert_eq!(grid.cols(), 1024);
    assert_eq!(grid.size(), expected_size::<u64>(768, 1024));
    assert_eq!(grid.size(), 12_288);
}

#[test]
fn size_large_u8() {
    let grid = PackedGrid::<1000, 1000, u8>::new();
    assert_eq!(grid.rows(), 1000);
    assert_eq!(grid.cols(), 1000);
    assert_eq!(grid.size(), expected_size::<u8>(1000, 1000));
    assert_eq!(grid.size(), 125_000);
}

#[test]
fn size_huge_u16() {
    let grid = Box::new(PackedGrid::<12_345, 6_789, u16>::new());
    assert_eq!(grid.rows(), 12_345);
    assert_eq!(grid.cols(), 6_789);
    assert_eq!(grid.size(), expected_size::<u16>(12_345, 6_789));
    assert_eq!(grid.size(), 5_238_137);
    // 83_810_205 bits is not a multiple of 16, so one more word is allocated.
    assert_eq!(grid.storage_len(), 5_238_138);
    assert_eq!(grid.data().len(), grid.storage_len());
}

#[test]
fn associated_consts_match_methods() {
    type G = PackedGrid<10, 10, u8>;
    let grid = G::new();
    assert_eq!(G::SIZE, grid.size());
    assert_eq!(G::STORAGE_LEN, grid.storage_len());
    assert_eq!(G::SIZE, 12);
    assert_eq!(G::STORAGE_LEN, 13);
}

//
// -----------------------------------------------------------------------------
// Patterns
// -----------------------------------------------------------------------------

#[test]
fn pattern_empty() -> Result<(), GridError> {
    let grid = PackedGrid::<64, 64>::new();
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            assert!(!grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    Ok(())
}

#[test]
fn pattern_full() -> Result<(), GridError> {
    let mut grid = PackedGrid::<64, 64>::new();
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            grid.mark(i, j)?;
        }
    }
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            assert!(grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    assert!(grid.data().iter().all(|&w| w == usize::MAX));
    Ok(())
}

#[test]
fn pattern_one_zero() -> Result<(), GridError> {
    let mut grid = PackedGrid::<64, 64>::new();
    for i in (0..grid.rows()).step_by(2) {
        for j in (0..grid.cols()).step_by(2) {
            grid.mark(i, j)?;
        }
    }
    for i in (1..grid.rows()).step_by(2) {
        for j in (1..grid.cols()).step_by(2) {
            assert!(!grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    for i in (0..grid.rows()).step_by(2) {
        for j in (0..grid.cols()).step_by(2) {
            assert!(grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    Ok(())
}

#[test]
fn pattern_zero_one() -> Result<(), GridError> {
    let mut grid = PackedGrid::<64, 64>::new();
    for i in (1..grid.rows()).step_by(2) {
        for j in (1..grid.cols()).step_by(2) {
            grid.mark(i, j)?;
        }
    }
    for i in (1..grid.rows()).step_by(2) {
        for j in (1..grid.cols()).step_by(2) {
            assert!(grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    for i in (0..grid.rows()).step_by(2) {
        for j in (0..grid.cols()).step_by(2) {
            assert!(!grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    Ok(())
}

#[test]
fn pattern_checkerboard_odd_dimensions() -> Result<(), GridError> {
    // 13 columns of u8 means rows start mid-word.
    let mut grid = PackedGrid::<9, 13, u8>::new();
    for i in (0..grid.rows()).step_by(2) {
        for j in (0..grid.cols()).step_by(2) {
            grid.mark(i, j)?;
        }
    }
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            let expected = i % 2 == 0 && j % 2 == 0;
            assert_eq!(grid.get(i, j)?, expected, "i={}, j={}", i, j);
        }
    }
    Ok(())
}

#[test]
fn pattern_diagonal() -> Result<(), GridError> {
    let mut grid = PackedGrid::<64, 64>::new();
    for i in 0..grid.cols() {
        grid.mark(i, i)?;
    }
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            if i != j {
                assert!(!grid.get(i, j)?, "i={}, j={}", i, j);
            } else {
                assert!(grid.get(i, i)?, "i={}, j={}", i, j);
            }
        }
    }
    for i in 0..grid.cols() {
        grid.set(i, i, false)?;
    }
    for i in 0..grid.cols() {
        assert!(!grid[(i, i)]);
    }
    assert!(grid.data().iter().all(|&w| w == 0));
    Ok(())
}

#[test]
fn pattern_clear_after_fill() -> Result<(), GridError> {
    let mut grid = PackedGrid::<31, 17, u16>::new();
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            if (i + j) % 3 != 0 {
                grid.mark(i, j)?;
            }
        }
    }
    grid.clear();
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            assert!(!grid.get(i, j)?, "i={}, j={}", i, j);
        }
    }
    Ok(())
}

//
// -----------------------------------------------------------------------------
// Boundaries
// -----------------------------------------------------------------------------

#[cfg(not(feature = "unchecked"))]
#[test]
fn boundary_strictly_greater_is_rejected() {
    use packed_grid::Axis;

    let grid = PackedGrid::<64, 64>::new();
    assert_eq!(
        grid.get(65, 0),
        Err(GridError::CoordinateOutOfRange {
            axis: Axis::Row,
            value: 65,
            max: 64
        })
    );
    assert_eq!(
        grid.get(0, 65),
        Err(GridError::CoordinateOutOfRange {
            axis: Axis::Col,
            value: 65,
            max: 64
        })
    );
    assert_eq!(
        grid.get(0, 65).unwrap_err().to_string(),
        "col is out of range. max: 64; is: 65"
    );
}

#[test]
fn boundary_equal_is_accepted() -> Result<(), GridError> {
    let mut grid = PackedGrid::<64, 64>::new();

    // (r, 64) is the flat index of (r + 1, 0).
    grid.mark(2, 0)?;
    assert!(grid.get(1, 64)?);
    assert!(!grid.get(0, 64)?);

    // (64, c) lies past the last word, so only the storage check fires.
    assert!(matches!(
        grid.get(64, 0),
        Err(GridError::StorageOutOfRange { .. })
    ));
    Ok(())
}

#[test]
fn boundary_equal_on_padding() -> Result<(), GridError> {
    let grid = PackedGrid::<4, 4, u32>::new();
    for c in 0..=4 {
        assert!(!grid.get(4, c)?);
    }
    for r in 0..=4 {
        assert!(!grid.get(r, 4)?);
    }
    Ok(())
}

#[cfg(feature = "unchecked")]
#[test]
fn unchecked_feature_skips_coordinate_check() -> Result<(), GridError> {
    let mut grid = PackedGrid::<8, 8, u8>::new();

    // (0, 9) is flat index 9, the same cell as (1, 1).
    grid.mark(0, 9)?;
    assert!(grid.get(1, 1)?);

    // (9, 0) is past the 8 words of storage.
    assert_eq!(
        grid.get(9, 0),
        Err(GridError::StorageOutOfRange { word: 9, len: 8 })
    );

    // A flat index that overflows is rejected before any arithmetic wraps.
    assert_eq!(
        grid.get(usize::MAX, usize::MAX),
        Err(GridError::StorageOutOfRange {
            word: usize::MAX,
            len: 8
        })
    );
    Ok(())
}
