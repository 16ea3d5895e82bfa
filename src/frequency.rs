/// Occurrence count of every byte value in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; 256],
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        for &byte in bytes {
            counts[byte as usize] += 1;
        }
        FrequencyTable { counts }
    }

    pub fn get(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    /// Observed symbols and their counts, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols observed.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }
}

impl FromIterator<(u8, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        let mut counts = [0usize; 256];
        for (symbol, count) in iter {
            counts[symbol as usize] += count;
        }
        FrequencyTable { counts }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_only_observed_bytes() {
        let table = FrequencyTable::from_bytes(b"AABC");
        let observed: Vec<_> = table.iter().collect();
        assert_eq!(observed, vec![(b'A', 2), (b'B', 1), (b'C', 1)]);
        assert_eq!(table.distinct(), 3);
        assert_eq!(table.total(), 4);
        assert_eq!(table.get(b'Z'), 0);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = FrequencyTable::from_bytes(&[]);
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn collects_from_pairs() {
        let table: FrequencyTable = [(0xff, 3), (0x00, 1), (0xff, 2)].into_iter().collect();
        assert_eq!(table.get(0xff), 5);
        assert_eq!(table.iter().next(), Some((0x00, 1)));
    }
}
