

use core::panic;
use std::{error::Error, env, fs::File, io::{self, BufRead}};
extern crate ibm1_trainer;
use ibm1_trainer::Lookup;


// this module has some checks on a trained table, functionality to get
// the K most probable source translations of given target words.
// treated as binary executable so it can be ran independently from main

fn main() {

    // arguments to this executable should be:
    // path to a queries file, one target word per line
    // path to the trained table (npy), without the extension
    // path to the source words map (txt), without the extension
    // path to the target words map (txt), without the extension
    // example: ... Input/queries.txt Output/table Output/source_words Output/target_words
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 { panic!("input arguments should be a queries file followed by paths to the table, source words and target words"); }

    // read queries file
    let open_in_file = File::open(&args[1]).expect("could not open queries file");
    let lines = io::BufReader::new(open_in_file).lines();

    // read in the trained table and word maps
    let lookup_obj = match Lookup::new(&args[2], &args[3], &args[4]) {
        Ok(lookup_obj) => lookup_obj,
        Err(e) => panic!("{}", e)
    };

    let inputs = lines
    .into_iter()
    .map(|line| line.expect("could not read line"))
    .collect::<Vec<String>>();

    if let Err(e) = run_queries(&inputs, 10, lookup_obj) {
        panic!("{}", e);
    };

}


fn run_queries(inputs: &[String], k: usize, lookup_object: Lookup) -> Result<(), Box<dyn Error>> {

    // finding the k most probable source translations for each target word

    for target_word in inputs {

        println!("searching {} most probable translations of {}", k, target_word);
        let translations = lookup_object.find_k_most_probable(target_word, k)?;
        for (i, (source_word, score)) in translations.iter().enumerate() {
            println!("{} : {} ? {} = {}", i, target_word, source_word, score);
        }
        println!("\n");
    }

    Ok(())

}
