use std::collections::HashSet;

/// Residue pairs straddling a chain break that must not receive the
/// short-range backbone stiffness, because no covalent connectivity exists
/// across the break.
///
/// For a split index `s` (the last residue of the first chain), the set is
/// the triangular cluster `(s-2+i, s+1+j)` for `i` in `0..3` and `j` in
/// `0..=i`. Pairs whose lower index would be negative are omitted; they
/// could never match a real residue pair anyway, since membership is tested
/// by exact pair match.
#[derive(Debug, Clone)]
pub struct ChainBreakExclusions {
    pairs: HashSet<(usize, usize)>,
}

impl ChainBreakExclusions {
    pub fn new(split_chain: usize) -> Self {
        let mut pairs = HashSet::new();
        for i in 0..3i64 {
            for j in 0..=i {
                let lo = split_chain as i64 - 2 + i;
                let hi = split_chain as i64 + 1 + j;
                if lo >= 0 {
                    pairs.insert((lo as usize, hi as usize));
                }
            }
        }
        Self { pairs }
    }

    /// Order-insensitive membership test.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.pairs.contains(&(i.min(j), i.max(j)))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
