//! K closest points to the origin by quickselect.
//!
//! Points are compared by squared Euclidean distance, which orders them exactly
//! like the true distance without leaving integer arithmetic.

use rand::Rng;

use crate::{Error, Result};

/// An `[x, y]` point on the plane
pub type Point = [i32; 2];

/// Squared distance from the origin, computed in `i64`
pub fn squared_distance(point: &Point) -> i64 {
    let x = i64::from(point[0]);
    let y = i64::from(point[1]);
    x * x + y * y
}

/// Returns the `k` points closest to the origin, in no particular order
pub fn closest_k_points(points: &[Point], k: usize) -> Result<Vec<Point>> {
    let mut points = points.to_vec();
    select_closest(&mut points, k, &mut rand::thread_rng())?;
    points.truncate(k);
    Ok(points)
}

/// Rearranges `points` in place so that `points[..k]` are the `k` closest to the origin.
///
/// Only the side of each partition holding rank `k` is revisited, for expected linear time.
pub fn select_closest<R>(points: &mut [Point], k: usize, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    if k == 0 || k > points.len() {
        return Err(Error::InvalidK {
            k,
            len: points.len(),
        });
    }

    // Invariant: lo <= target < hi, and [lo, hi) holds ranks lo..hi
    let target = k - 1;
    let (mut lo, mut hi) = (0, points.len());
    while hi - lo > 1 {
        let pivot = rng.gen_range(lo..hi);
        points.swap(lo, pivot);
        let split = lo + partition(&mut points[lo..hi]);

        if split == target {
            break;
        } else if split < target {
            lo = split + 1;
        } else {
            hi = split;
        }
    }
    Ok(())
}

/// Lomuto partition around `data[0]`; returns the pivot's final index.
/// Everything left of it is strictly closer, everything right is not.
fn partition(data: &mut [Point]) -> usize {
    debug_assert!(!data.is_empty());

    let pivot = squared_distance(&data[0]);
    let mut store = 1;
    for i in 1..data.len() {
        if squared_distance(&data[i]) < pivot {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(0, store - 1);
    store - 1
}
