

// imports
use flate2::read::GzDecoder;

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};


pub struct CorpusReader {
    pairs: Vec<(Vec<String>, Vec<String>)>,
    source_words: HashMap<String, usize>,
    target_words: HashMap<String, usize>,
}

impl CorpusReader {

    // reads up to max_lines sentence pairs from a parallel corpus file and
    // indexes both vocabularies in the same bounded scan. The pairs are kept
    // in memory, every training epoch traverses the same buffer, so the
    // vocabularies and the epochs always see the identical bounded stream.

    pub fn new(corpus_file: &str, max_lines: usize, lowercase: bool, progress_verbose: bool) -> Result<CorpusReader, Box<dyn Error>> {

        let mut reader = CorpusReader {
            pairs: Vec::new(),
            source_words: HashMap::new(),
            target_words: HashMap::new(),
        };
        reader.load(corpus_file, max_lines, lowercase)?;

        if progress_verbose {
            println!("read {} sentence pairs, {} source words, {} target words",
            reader.pairs.len(), reader.source_words.len(), reader.target_words.len());
        }

        Ok(reader)
    }

    fn read_file(file_path: &str) -> Result<Box<dyn BufRead>, Box<dyn Error>> {

        // a corpus ending in .gz is decompressed on the fly, anything else
        // is read as plain text
        let f = File::open(file_path)?;
        if file_path.ends_with(".gz") {
            Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(f)))))
        } else {
            Ok(Box::new(BufReader::new(f)))
        }
    }

    fn parse_line(line: &str, line_number: usize, lowercase: bool) -> Result<(Vec<String>, Vec<String>), Box<dyn Error>> {

        // each line holds two tab separated sentences, source then target.
        // fields are read positionally, anything after the second tab is
        // ignored. A line with fewer than two fields is rejected rather
        // than mis-tokenized.
        let fields = line.split('\t').collect::<Vec<&str>>();
        if fields.len() < 2 {
            return Err(format!("corrupt corpus line {}: expected two tab-separated sentences, found {} field(s)", line_number, fields.len()).into());
        }

        let (source, target) = if lowercase {
            (CorpusReader::tokenize(&fields[0].to_lowercase()), CorpusReader::tokenize(&fields[1].to_lowercase()))
        } else {
            (CorpusReader::tokenize(fields[0]), CorpusReader::tokenize(fields[1]))
        };

        Ok((source, target))
    }

    fn index_words(tokens: &[String], words: &mut HashMap<String, usize>) {

        // ids are dense and assigned in first seen order, repeated words
        // keep the id of their first appearance
        for tok in tokens {
            let next_id = words.len();
            words.entry(tok.to_owned()).or_insert(next_id);
        }
    }

    fn load(&mut self, corpus_file: &str, max_lines: usize, lowercase: bool) -> Result<(), Box<dyn Error>> {

        let f = CorpusReader::read_file(corpus_file)?;
        for (i, line) in f.lines().take(max_lines).enumerate() {

            let (source, target) = CorpusReader::parse_line(&line?, i + 1, lowercase)?;
            CorpusReader::index_words(&source, &mut self.source_words);
            CorpusReader::index_words(&target, &mut self.target_words);
            self.pairs.push((source, target));
        }
        Ok(())
    }

    // the bounded, restartable sequence of sentence pairs
    pub fn pairs(&self) -> &[(Vec<String>, Vec<String>)] {
        &self.pairs
    }

    pub fn source_words(&self) -> &HashMap<String, usize> {
        &self.source_words
    }

    pub fn target_words(&self) -> &HashMap<String, usize> {
        &self.target_words
    }

}


// defines the behavior needed for tokenizing a corpus
trait Tokenizer {
    fn tokenize(sequence: &str) -> Vec<String>;
}

impl Tokenizer for CorpusReader {
    // split on whitespace runs, empty tokens are dropped
    fn tokenize(sequence: &str) -> Vec<String> {
        return sequence.split_whitespace().map(|x| x.to_string()).collect();
    }
}
