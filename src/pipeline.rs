

// imports
use crate::config::Config;
use crate::corpus::CorpusReader;
use crate::export::Writer;
use crate::train::Train;

use core::panic;
use std::env;
use std::time::Instant;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 4 steps -
    // -> configuration of arguments
    // -> corpus reading and vocab building
    // -> EM training of the translation table
    // -> saving of the table and the readable results

    pub fn run() {

        println!("entering program...");
        let args: Vec<String> = env::args().collect();

        println!("building parameters...");
        let params = match Config::new(&args) {
            Ok(config) => config.get_params(),
            Err(e) => panic!("{}", e)
        };
        println!("{}", params);

        // read the parallel corpus and index both vocabularies
        let timer = Instant::now();
        println!("starting corpus reading...");
        let reader = match CorpusReader::new(&params.corpus_file, params.max_lines, params.lowercase, params.json_train.progress_verbose) {
            Ok(reader) => reader,
            Err(e) => panic!("{}", e)
        };
        println!("finished corpus reading, indexed {} source and {} target words, took {} seconds ...", reader.source_words().len(), reader.target_words().len(), timer.elapsed().as_secs());

        // run the EM iterations
        let timer = Instant::now();
        println!("starting training part...");
        let trainer = match Train::run(&reader, &params.json_train) {
            Ok(trainer) => trainer,
            Err(e) => panic!("{}", e)
        };
        println!("finished training, learned {} pair probabilities, took {} seconds ...", trainer.get_table().len(), timer.elapsed().as_secs());

        // save the table and the per target word results
        let timer = Instant::now();
        if let Err(e) = Writer::run(&trainer, &reader, &params) {
            panic!("{}", e)
        }
        println!("finished saving, took {} seconds ...", timer.elapsed().as_secs());

    }

}
