

// imports
use crate::config::files_handling;

use ndarray::prelude::*;
use ndarray_stats::QuantileExt;

use std::collections::HashMap;
use std::error::Error;

pub struct Lookup {
    w: Array2<f64>,
    target_words: HashMap<String, usize>,
    i2source: HashMap<usize, String>,
}

impl Lookup {

    // answers translation queries against a finished run: loads the dense
    // table and the two word maps back from the output folder and ranks the
    // source candidates of a target word by probability.

    pub fn new(table_path: &str, source_words_path: &str, target_words_path: &str) -> Result<Lookup, Box<dyn Error>> {

        let w = files_handling::read_input::<Array2<f64>>(table_path)?;
        let source_words = files_handling::read_input::<HashMap<String, usize>>(source_words_path)?;
        let target_words = files_handling::read_input::<HashMap<String, usize>>(target_words_path)?;

        assert_eq!(w.dim().0, source_words.len(), "inconsistent number of rows in table and source words");
        assert_eq!(w.dim().1, target_words.len(), "inconsistent number of columns in table and target words");

        // probabilities live in [0, 1], a small slack covers rounding
        if w.len() > 0 {
            let w_max = *w.max()?;
            let w_min = *w.min()?;
            assert!(w_max <= 1.0 + 1e-9);
            assert!(w_min >= 0.0);
        }

        let i2source: HashMap<usize, String> = source_words.iter().map(|(t, i)| (*i, t.to_owned())).collect();

        Ok(
            Lookup {
                w: w,
                target_words: target_words,
                i2source: i2source,
            }
        )
    }

    pub fn find_k_most_probable(&self, target_word: &str, k: usize) -> Result<Vec<(String, f64)>, Box<dyn Error>> {

        let c = match self.target_words.get(target_word) {
            Some(c) => *c,
            None => return Err(format!("word: {} is not in the target vocabulary", target_word).into())
        };

        // sort the word's column in descending order of probability
        let mut indexed_scores: Vec<(usize, f64)> = self.w.column(c).iter().map(|x| x.to_owned()).enumerate().collect();
        indexed_scores.sort_by(|(_i, s), (_j, t)| t.total_cmp(s));

        // collect the k best source words, fewer if the vocabulary is smaller
        let mut translations: Vec<(String, f64)> = Vec::new();
        for (index, score) in indexed_scores.iter().take(k) {
            let source_word = self.i2source.get(index).unwrap().to_string(); // safe to unwrap
            translations.push((source_word, *score));
        }

        Ok(translations)
    }

}
