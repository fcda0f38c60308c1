//! Total order over dotted clause numbers
//!
//! Clause numbers mix numeric body segments with alphabetic annex
//! segments (`"14.7.5.5"`, `"A.2"`). Segments are compared left to
//! right: numerically when both sides parse as integers, with numeric
//! segments sorting before alphabetic ones, and lexically otherwise. A
//! strict prefix sorts before its extensions.

use std::cmp::Ordering;

/// Compare two dotted clause numbers.
pub fn compare_clause_numbers(a: &str, b: &str) -> Ordering {
    let a_segments: Vec<&str> = a.split('.').collect();
    let b_segments: Vec<&str> = b.split('.').collect();

    for (i, a_seg) in a_segments.iter().enumerate() {
        let Some(b_seg) = b_segments.get(i) else {
            // b is a strict prefix of a
            return Ordering::Greater;
        };
        match (a_seg.parse::<u64>(), b_seg.parse::<u64>()) {
            (Ok(an), Ok(bn)) => {
                if an != bn {
                    return an.cmp(&bn);
                }
            }
            // numeric body segments sort before lettered annex segments
            (Ok(_), Err(_)) => return Ordering::Less,
            (Err(_), Ok(_)) => return Ordering::Greater,
            (Err(_), Err(_)) => {
                if a_seg != b_seg {
                    return a_seg.cmp(b_seg);
                }
            }
        }
    }

    if a_segments.len() == b_segments.len() {
        Ordering::Equal
    } else {
        Ordering::Less
    }
}
