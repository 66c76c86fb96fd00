use std::ops::{Index, IndexMut};

/// Furthest point reached on one diagonal, plus the script that got there.
#[derive(Debug, Clone, Default)]
pub(crate) struct KLine<Tr> {
    pub x: usize,
    pub trace: Tr,
}

/// Frontier records indexed by diagonal `k = x - y`.
///
/// `k` ranges over `-max..=max`, so the backing `Vec` is shifted by `max`.
/// Only one record per diagonal is kept: depth `d` writes diagonals with the
/// parity of `d` and reads the neighbours written at `d - 1`, which have the
/// other parity, so a single table serves every depth.
#[derive(Debug)]
pub(crate) struct Frontier<Tr> {
    offset: isize,
    lines: Vec<KLine<Tr>>,
}

impl<Tr: Clone + Default> Frontier<Tr> {
    pub fn new(max: usize) -> Self {
        Self {
            offset: max as isize,
            lines: vec![KLine::default(); 2 * max + 1],
        }
    }
}

impl<Tr> Index<isize> for Frontier<Tr> {
    type Output = KLine<Tr>;

    fn index(&self, k: isize) -> &KLine<Tr> {
        &self.lines[(k + self.offset) as usize]
    }
}

impl<Tr> IndexMut<isize> for Frontier<Tr> {
    fn index_mut(&mut self, k: isize) -> &mut KLine<Tr> {
        &mut self.lines[(k + self.offset) as usize]
    }
}
