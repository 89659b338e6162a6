// RFC 1982 serial arithmetic: wire offsets wrap, stream positions do not.

/// Valid while the true distance stays within +/- 2^31.
pub fn seq_delta(seq: u32, base: u32) -> i32 {
    seq.wrapping_sub(base) as i32
}

/// Stream position of wire offset `seq` given the cursor's position and wire
/// value. Negative results lie before the first stream byte.
pub fn unwrap_offset(cursor_pos: u64, cursor_seq: u32, seq: u32) -> i64 {
    cursor_pos as i64 + i64::from(seq_delta(seq, cursor_seq))
}

pub fn wire_offset(base: u32, pos: u64) -> u32 {
    base.wrapping_add(pos as u32)
}

#[cfg(test)]
mod tests {
    use super::{seq_delta, unwrap_offset, wire_offset};

    #[test]
    fn ordering_survives_wraparound() {
        assert_eq!(seq_delta(3, u32::MAX - 5), 9);
        assert_eq!(seq_delta(7, 7), 0);
        assert_eq!(seq_delta(2, u32::MAX), 3);
        assert_eq!(seq_delta(u32::MAX, 2), -3);
    }

    #[test]
    fn unwrap_maps_across_the_boundary() {
        let base = u32::MAX - 9;
        let cursor_pos = 8;
        let cursor_seq = wire_offset(base, cursor_pos);
        assert_eq!(cursor_seq, u32::MAX - 1);

        assert_eq!(unwrap_offset(cursor_pos, cursor_seq, 4), 14);
        assert_eq!(unwrap_offset(cursor_pos, cursor_seq, u32::MAX - 9), 0);
        assert_eq!(unwrap_offset(cursor_pos, cursor_seq, u32::MAX - 11), -2);
    }
}
