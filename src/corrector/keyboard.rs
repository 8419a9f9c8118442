use lazy_static::lazy_static;
use std::collections::HashMap;

/// The three staggered letter rows of a QWERTY/ANSI keyboard. Letters only;
/// digits and punctuation have no coordinate and are never compared.
const ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Euclidean distance between 'p' (0,9) and 'z' (2,0), the layout's two
/// extreme corners. Dividing by it bounds the metric to roughly one per
/// differing position.
const CORNER_DISTANCE: f64 = 9.22;

lazy_static! {
    static ref KEY_COORDS: HashMap<char, (i32, i32)> = {
        let mut coords = HashMap::new();
        for (row, keys) in ROWS.iter().enumerate() {
            for (col, ch) in keys.chars().enumerate() {
                coords.insert(ch, (row as i32, col as i32));
            }
        }
        coords
    };
}

/// Keyboard-proximity distance between two strings.
///
/// For each index up to the shorter string's length, the characters at that
/// index contribute the Euclidean distance between their key coordinates
/// (0 for the same key). The sum is normalized by the 'p'-'z' corner
/// distance. Characters without a coordinate, and positions beyond the
/// shorter string, contribute nothing.
pub fn distance(a: &str, b: &str) -> f64 {
    let mut total = 0.0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if let (Some(&(row_a, col_a)), Some(&(row_b, col_b))) =
            (KEY_COORDS.get(&ca), KEY_COORDS.get(&cb))
        {
            let dr = f64::from(row_a - row_b);
            let dc = f64::from(col_a - col_b);
            total += (dr * dr + dc * dc).sqrt();
        }
    }
    total / CORNER_DISTANCE
}
