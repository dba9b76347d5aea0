

use std::collections::HashMap;


// the conditional translation distribution being learned, kept sparse.
// only pairs that maximization has actually scored hold an explicit entry,
// every other (source, target) pair reads as the uniform default fixed at
// construction. entries are never removed, the table only grows.
#[derive(Clone, Debug, PartialEq)]
pub struct TranslationTable {
    entries: HashMap<(usize, usize), f64>,
    default: f64,
}

impl TranslationTable {

    pub fn new(target_vocab_size: usize) -> TranslationTable {

        // uniform initialization over the target vocabulary. an empty
        // vocabulary (empty corpus) gets a default of 0.0 so training stays
        // a no-op instead of dividing by zero.
        let default = match target_vocab_size {
            0 => 0.0,
            n => 1.0 / n as f64,
        };

        TranslationTable {
            entries: HashMap::new(),
            default: default,
        }
    }

    pub fn get(&self, source_id: usize, target_id: usize) -> f64 {
        match self.entries.get(&(source_id, target_id)) {
            Some(probability) => *probability,
            None => self.default,
        }
    }

    pub fn set(&mut self, source_id: usize, target_id: usize, probability: f64) {
        self.entries.insert((source_id, target_id), probability);
    }

    pub fn default(&self) -> f64 {
        self.default
    }

    pub fn entries(&self) -> &HashMap<(usize, usize), f64> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

}


#[cfg(test)]
mod tests {

    use super::TranslationTable;

    #[test]
    fn uniform_start_test() {

        // immediately after construction every pair reads 1 / |target vocab|
        let table = TranslationTable::new(4);
        assert_eq!(table.get(0, 0), 0.25);
        assert_eq!(table.get(17, 3), 0.25);
        assert!(table.is_empty());
    }

    #[test]
    fn set_then_get_test() {

        let mut table = TranslationTable::new(2);
        table.set(1, 0, 0.75);

        assert_eq!(table.get(1, 0), 0.75);
        // untouched pairs still read the default
        assert_eq!(table.get(1, 1), 0.5);
        assert_eq!(table.get(0, 0), 0.5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_vocab_test() {

        // a degenerate table must not hold an infinite default
        let table = TranslationTable::new(0);
        assert_eq!(table.default(), 0.0);
        assert_eq!(table.get(0, 0), 0.0);
    }

}
