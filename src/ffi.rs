//! C ABI for both entry points.

use crate::algorithm::network_delay::network_delay_time;
use crate::selection::{select_closest, Point};

/// Network delay time over `edge_count` edges laid out as `[from, to, weight]` triples.
/// Returns -1 when some node is unreachable, `edges` is null or `edge_count * 3` overflows.
#[no_mangle]
pub extern "C" fn ndt_network_delay_time(
    edges: *const u32,
    edge_count: usize,
    n: usize,
    source: u32,
) -> i64 {
    if edges.is_null() {
        return -1;
    }
    let Some(len) = edge_count.checked_mul(3) else {
        return -1;
    };
    let flat = unsafe { std::slice::from_raw_parts(edges, len) };
    let times: Vec<(u32, u32, u32)> = flat
        .chunks_exact(3)
        .map(|t| (t[0], t[1], t[2]))
        .collect();
    network_delay_time(&times, n, source)
}

/// Reorders `len` points laid out as `[x, y]` pairs so that the first `k` are the closest
/// to the origin. Returns false on a null pointer or an invalid `k`.
#[no_mangle]
pub extern "C" fn ndt_closest_k_points(points: *mut i32, len: usize, k: usize) -> bool {
    if points.is_null() {
        return false;
    }
    let points = unsafe { std::slice::from_raw_parts_mut(points as *mut Point, len) };
    select_closest(points, k, &mut rand::thread_rng()).is_ok()
}
