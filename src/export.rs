

// imports
use crate::config::{self, JsonTypes};
use crate::corpus::CorpusReader;
use crate::train::Train;
use crate::translation::TranslationTable;

use ndarray::Array2;
use std::collections::HashMap;
use std::error::Error;


pub struct Writer {
    w: Array2<f64>,
    i2source: HashMap<usize, String>,
    i2target: HashMap<usize, String>,
}

impl Writer {

    // turns a finished training run into files: a readable per target word
    // summary, the dense probability matrix in npy format, the sparse table
    // rows in csv format and the two vocabularies that map words to row and
    // column ids.

    fn new(trainer: &Train, reader: &CorpusReader) -> Writer {

        let num_source = reader.source_words().len();
        let num_target = reader.target_words().len();

        let w = Writer::to_matrix(trainer.get_table(), num_source, num_target);
        let i2source: HashMap<usize, String> = reader.source_words().iter().map(|(t, i)| (*i, t.to_owned())).collect();
        let i2target: HashMap<usize, String> = reader.target_words().iter().map(|(t, i)| (*i, t.to_owned())).collect();

        Writer {
            w: w,
            i2source: i2source,
            i2target: i2target,
        }
    }

    fn to_matrix(table: &TranslationTable, num_source: usize, num_target: usize) -> Array2<f64> {

        // cells the training never touched keep the table's default, so the
        // dense view answers every (source, target) query the sparse one does
        let mut w: Array2<f64> = Array2::from_elem((num_source, num_target), table.default());
        for ((e, c), v) in table.entries() {
            w[[*e, *c]] = *v;
        }
        w
    }

    fn top_source_ids(&self, target_id: usize, k: usize) -> Vec<usize> {

        // descending by probability. the sort is stable and the candidates
        // are enumerated in id order, so ties resolve to the lower id.
        let mut scored: Vec<(usize, f64)> = self.w.column(target_id).iter().copied().enumerate().collect();
        scored.sort_by(|(_, v0), (_, v1)| v1.total_cmp(v0));
        scored.iter().take(k).map(|(i, _v)| *i).collect()
    }

    fn format_results(&self) -> Vec<String> {

        // one line per target word, in column id order, holding the word and
        // its 3 most probable source translations
        let num_target = self.i2target.len();
        let mut lines: Vec<String> = Vec::with_capacity(num_target);

        for c in 0..num_target {

            let target = self.i2target.get(&c).unwrap(); // safe to unwrap, ids are dense
            let top_words: Vec<&str> = self.top_source_ids(c, 3)
            .iter()
            .map(|e| self.i2source.get(e).unwrap().as_str()) // safe to unwrap, ids are dense
            .collect();

            lines.push(format!("{}\t{}", target, top_words.join(" ")));
        }

        lines
    }

    pub fn run(trainer: &Train, reader: &CorpusReader, params: &JsonTypes) -> Result<(), Box<dyn Error>> {

        let writer = Writer::new(trainer, reader);

        // the readable summary
        let results = writer.format_results();
        config::files_handling::save_output::<Vec<String>>(&params.output_dir, "result", results)?;

        // the table itself, dense for npy consumers and sparse for csv consumers
        config::files_handling::save_output::<HashMap<(usize, usize), f64>>(&params.output_dir, "table", trainer.get_table().entries().clone())?;
        config::files_handling::save_output::<Array2<f64>>(&params.output_dir, "table", writer.w)?;

        // the word maps, needed to interpret row and column ids
        config::files_handling::save_output::<HashMap<String, usize>>(&params.output_dir, "source_words", reader.source_words().clone())?;
        config::files_handling::save_output::<HashMap<String, usize>>(&params.output_dir, "target_words", reader.target_words().clone())?;

        println!("saved results and table to {}", params.output_dir);
        Ok(())
    }

}


#[cfg(test)]
mod tests {

    use super::Writer;
    use crate::config::{JsonTrain, JsonTypes, files_handling};
    use crate::corpus::CorpusReader;
    use crate::train::Train;

    use ndarray::Array2;
    use std::fs::File;
    use std::io::Write;

    fn write_corpus(file_name: &str, lines: &[&str]) -> String {
        let path = std::env::temp_dir().join(file_name);
        let mut f = File::create(&path).unwrap();
        for line in lines {
            writeln!(f, "{}", line).unwrap();
        }
        path.to_str().unwrap().to_string()
    }

    fn trained(corpus_file: &str, lines: &[&str], num_iterations: usize) -> (Train, CorpusReader) {
        let path = write_corpus(corpus_file, lines);
        let reader = CorpusReader::new(&path, 10, false, false).unwrap();
        let params = JsonTrain { num_iterations: num_iterations, progress_verbose: false };
        let trainer = Train::run(&reader, &params).unwrap();
        (trainer, reader)
    }

    #[test]
    fn matrix_default_fill_test() {

        // an untrained table densifies to its uniform default in every cell
        let (trainer, reader) = trained("ibm1_export_default_fill_test.txt", &["a b\tx y"], 0);
        let writer = Writer::new(&trainer, &reader);
        assert_eq!(writer.w, Array2::from_elem((2, 2), 0.5));
    }

    #[test]
    fn tie_keeps_first_seen_order_test() {

        // one epoch on a single sentence splits x's mass evenly between a
        // and b, the tie resolves to first seen order
        let (trainer, reader) = trained("ibm1_export_tie_test.txt", &["a b\tx"], 1);
        let writer = Writer::new(&trainer, &reader);

        assert_eq!(writer.w[[0, 0]], 0.5);
        assert_eq!(writer.w[[1, 0]], 0.5);
        assert_eq!(writer.format_results(), vec!["x\ta b".to_string()]);
    }

    #[test]
    fn ranking_test() {

        // after one epoch a is the better translation of x and b the better
        // translation of y, and lines come out in target id order
        let (trainer, reader) = trained("ibm1_export_ranking_test.txt", &["a b\tx y", "a\tx"], 1);
        let writer = Writer::new(&trainer, &reader);

        let results = writer.format_results();
        assert_eq!(results, vec!["x\ta b".to_string(), "y\tb a".to_string()]);
    }

    #[test]
    fn empty_corpus_export_test() {

        let (trainer, reader) = trained("ibm1_export_empty_test.txt", &[], 1);
        let writer = Writer::new(&trainer, &reader);

        assert_eq!(writer.w.dim(), (0, 0));
        assert!(writer.format_results().is_empty());
    }

    #[test]
    fn artifacts_test() {

        // a full save round: all five files land in the output folder and
        // the readable summary holds the ranked lines
        let (trainer, reader) = trained("ibm1_export_artifacts_test.txt", &["a b\tx y", "a\tx"], 1);
        let output_dir = std::env::temp_dir().join("ibm1_export_artifacts_out");
        let output_dir = output_dir.to_str().unwrap().to_string();

        let params = JsonTypes {
            corpus_file: String::new(),
            output_dir: output_dir.clone(),
            max_lines: 10,
            lowercase: false,
            json_train: JsonTrain { num_iterations: 1, progress_verbose: false },
        };
        Writer::run(&trainer, &reader, &params).unwrap();

        for file_name in ["result.txt", "table.npy", "table.csv", "source_words.txt", "target_words.txt"] {
            assert!(std::path::Path::new(&output_dir).join(file_name).exists());
        }

        let results = std::fs::read_to_string(std::path::Path::new(&output_dir).join("result.txt")).unwrap();
        assert_eq!(results.lines().collect::<Vec<&str>>(), vec!["x\ta b", "y\tb a"]);

        let w = files_handling::read_input::<Array2<f64>>(&(output_dir + "/table")).unwrap();
        assert_eq!(w.dim(), (2, 2));
        assert!((w[[0, 0]] - 4.0 / 7.0).abs() < 1e-12);
    }

}
