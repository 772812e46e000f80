/// Round `value` to the nearest multiple of `granularity`, ties rounding up.
///
/// `None`, zero or a negative granularity leave the value unchanged.
/// When the nearest multiple is not representable the other neighbour is returned.
pub fn round_minutes(value: i64, granularity: Option<i64>) -> i64 {
    let g = match granularity {
        Some(g) if g > 0 => g,
        _ => return value,
    };

    let rem = value.rem_euclid(g);
    let up = value.checked_add(g - rem);
    let down = value.checked_sub(rem);
    let nearest = if rem >= g - rem {
        up.or(down)
    } else {
        down.or(up)
    };
    nearest.unwrap_or(value)
}
