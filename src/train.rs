

// imports
use crate::config::JsonTrain;
use crate::corpus::CorpusReader;
use crate::translation::TranslationTable;

use std::collections::HashMap;
use std::error::Error;
use std::time::Instant;


pub struct Train {
    table: TranslationTable,
}

impl Train {

    // the IBM model 1 EM engine. Every epoch reads the corpus twice: a
    // first traversal sums the normalization denominator of every source
    // word, a second traversal distributes fractional counts against the
    // completed denominators, and the maximization step rewrites the
    // translation table from the counts. The table carries over between
    // epochs, the accumulators never do.

    fn new(reader: &CorpusReader) -> Train {

        // every source word starts from the same uniform probability over
        // the target vocabulary, so the first expectation step is well
        // defined for every pair that occurs
        Train {
            table: TranslationTable::new(reader.target_words().len()),
        }
    }

    pub fn get_table(&self) -> &TranslationTable {
        return &self.table;
    }

    fn encode(sentence: &[String], words: &HashMap<String, usize>) -> Vec<usize> {

        // both vocabularies were indexed from the same bounded stream that
        // is traversed here, so lookups cannot miss. unknown tokens are
        // skipped all the same.
        sentence.iter().filter_map(|tok| words.get(tok).copied()).collect()
    }

    fn expectation(&self, reader: &CorpusReader) -> (HashMap<(usize, usize), f64>, HashMap<usize, f64>) {

        // pass 1: accumulate the per source word denominator over the full
        // sentence cross product, with repetition. a word repeated k times
        // in a sentence contributes k times.
        let mut total_source: HashMap<usize, f64> = HashMap::new();
        for (source_sentence, target_sentence) in reader.pairs() {

            let source_ids = Train::encode(source_sentence, reader.source_words());
            let target_ids = Train::encode(target_sentence, reader.target_words());

            for e in &source_ids {
                for c in &target_ids {
                    let val = total_source.entry(*e).or_insert(0.0);
                    *val += self.table.get(*e, *c);
                }
            }
        }

        // pass 2: re-iterate the same corpus and distribute each pair's
        // probability as fractional counts. the denominators must be
        // complete before any share is computed, hence the second traversal.
        let mut count: HashMap<(usize, usize), f64> = HashMap::new();
        let mut total: HashMap<usize, f64> = HashMap::new();
        for (source_sentence, target_sentence) in reader.pairs() {

            let source_ids = Train::encode(source_sentence, reader.source_words());
            let target_ids = Train::encode(target_sentence, reader.target_words());

            for e in &source_ids {

                // a denominator of zero means the whole row underflowed,
                // there is no mass left to distribute for this word
                let denominator = match total_source.get(e) {
                    Some(d) if *d > 0.0 => *d,
                    _ => continue,
                };

                for c in &target_ids {
                    let share = self.table.get(*e, *c) / denominator;
                    let val = count.entry((*e, *c)).or_insert(0.0);
                    *val += share;
                    let val = total.entry(*c).or_insert(0.0);
                    *val += share;
                }
            }
        }

        (count, total)
    }

    fn maximization(&mut self, count: &HashMap<(usize, usize), f64>, total: &HashMap<usize, f64>) -> usize {

        // every counted pair becomes the fraction of its target word's mass
        // that the source word accounts for. a zero target total cannot
        // happen for a pair that was actually counted, degenerate inputs
        // keep their prior value instead of dividing by zero.
        let mut updated = 0;
        for ((e, c), pair_count) in count {
            match total.get(c) {
                Some(total_c) if *total_c > 0.0 => {
                    self.table.set(*e, *c, pair_count / total_c);
                    updated += 1;
                }
                _ => continue,
            }
        }
        updated
    }

    fn iterate(&mut self, reader: &CorpusReader, train_params: &JsonTrain) {

        for epoch in 0..train_params.num_iterations {

            let timer = Instant::now();

            // the accumulators live for exactly one epoch
            let (count, total) = self.expectation(reader);
            let updated = self.maximization(&count, &total);

            if train_params.progress_verbose {
                println!("finished epoch {}, updated {} pairs, took: {} seconds...", epoch, updated, timer.elapsed().as_secs());
            }
        }
    }

    pub fn run(reader: &CorpusReader, train_params: &JsonTrain) -> Result<Train, Box<dyn Error>> {

        let mut trainer = Train::new(reader);
        trainer.iterate(reader, train_params);
        Ok(trainer)
    }

}
