//! Byte diffs: the same search with `u8` as the unit.

use crate::op::{DiffOp, Hunk};
use crate::{diff_slices, Strategy};

/// Minimal edit script between two byte slices.
pub fn diff<'a>(src: &'a [u8], dst: &'a [u8]) -> Vec<Hunk<'a, u8>> {
    diff_slices(src, dst, Strategy::default())
}

/// Reconstructs the source bytes from a byte script.
pub fn patch_src(hunks: &[Hunk<'_, u8>]) -> Vec<u8> {
    collect(hunks, DiffOp::in_old)
}

/// Reconstructs the destination bytes from a byte script.
pub fn patch_dst(hunks: &[Hunk<'_, u8>]) -> Vec<u8> {
    collect(hunks, DiffOp::in_new)
}

fn collect(hunks: &[Hunk<'_, u8>], keep: fn(DiffOp) -> bool) -> Vec<u8> {
    hunks
        .iter()
        .filter(|hunk| keep(hunk.op))
        .flat_map(|hunk| hunk.items.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_and_reconstruct() {
        let src = b"hello world";
        let dst = b"hello rust";
        let hunks = diff(src, dst);
        assert_eq!(patch_src(&hunks), src.to_vec());
        assert_eq!(patch_dst(&hunks), dst.to_vec());
    }

    #[test]
    fn binary_diff_operations() {
        let hunks = diff(b"abcdef", b"abXdef");
        let ops: Vec<(DiffOp, &[u8])> = hunks.iter().map(|h| (h.op, h.items)).collect();
        assert_eq!(
            ops,
            vec![
                (DiffOp::Same, &b"ab"[..]),
                (DiffOp::Remove, &b"c"[..]),
                (DiffOp::Add, &b"X"[..]),
                (DiffOp::Same, &b"def"[..]),
            ]
        );
    }

    #[test]
    fn non_utf8_bytes() {
        let src = [0u8, 0xff, 0x80, 7];
        let dst = [0xffu8, 0x80, 9];
        let hunks = diff(&src, &dst);
        assert_eq!(patch_src(&hunks), src.to_vec());
        assert_eq!(patch_dst(&hunks), dst.to_vec());
    }
}
