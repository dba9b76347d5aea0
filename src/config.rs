

// imports
use serde_json::Value;

use std::error::Error;
use std::fmt::Display;
use std::fs;

#[derive(Clone, Debug)]
pub struct JsonTrain {
    pub num_iterations: usize,
    pub progress_verbose: bool,
}

impl Display for JsonTrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "training parameters:
        num_iterations: {},
        progress_verbose: {}",
        self.num_iterations, self.progress_verbose
        )
    }
}

#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub corpus_file: String,
    pub output_dir: String,
    pub max_lines: usize,
    pub lowercase: bool,
    pub json_train: JsonTrain,
}

impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        corpus_file: {}
        output_dir: {}
        max_lines: {}
        lowercase: {}
        Using training parameters: {}",
        self.corpus_file, self.output_dir, self.max_lines, self.lowercase, self.json_train)
    }
}

pub struct Config {
    params: JsonTypes,
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        return self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        if args.len() != 2 {
            return Err(format!("input should be a path to a json file only").into());
        }

        // parse input json
        let f = fs::File::open(&args[1]).expect("cannot open json file");
        let json: Value = serde_json::from_reader(f).expect("cannot read json file");

        // validate input and output in json
        let corpus_file = json.get("corpus_file").expect("corpus_file was not supplied through json").as_str().expect("cannot cast corpus file to string");
        let output_dir = json.get("output_dir").expect("output_dir was not supplied through json").as_str().expect("cannot cast output path to string");

        // handle default vs input parameters
        let num_iterations = match json.get("num_iterations") {
            Some(num_iterations) => num_iterations.as_u64().expect("panic since given num_iterations is not a non-negative integer"),
            None => 10
        };
        let max_lines = match json.get("max_lines") {
            Some(max_lines) => max_lines.as_u64().expect("panic since given max_lines is not a non-negative integer"),
            None => 2000
        };
        let lowercase = match json.get("lowercase") {
            Some(lowercase) => lowercase.as_bool().expect("panic since given lowercase is not boolean"),
            None => false
        };
        let progress_verbose = match json.get("progress_verbose") {
            Some(progress_verbose) => progress_verbose.as_bool().expect("panic since given progress_verbose is not boolean"),
            None => false
        };

        let params = JsonTypes {
            corpus_file: corpus_file.to_owned(),
            output_dir: output_dir.to_owned(),
            max_lines: max_lines as usize,
            lowercase: lowercase,
            json_train: JsonTrain {
                num_iterations: num_iterations as usize,
                progress_verbose: progress_verbose,
            }
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}


// handles reading and saving of the pipeline artifacts: the npy probability
// matrix, the json word maps, the plain text result lines and the csv rows
// of the sparse table entries.
pub mod files_handling {

    use ndarray::Array2;
    use ndarray_npy::{ReadNpyError, read_npy, write_npy};

    use std::collections::HashMap;
    use std::error::Error;
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item, <R as ReadFile>::Error> {
        let input = <R as ReadFile>::read_file(file_path)?;
        Ok(input)
    }

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error>
    where
        <S as SaveFile>::Error: From<std::io::Error>,
    {
        // create output folder
        fs::create_dir_all(output_dir)?;

        // SaveFile can be the probability matrix, a word map, result lines
        // or the sparse table rows
        item.save_file(output_dir, file_name)?;
        return Ok(())
    }

    pub trait ReadFile {
        type Error;
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error>;
    }

    impl ReadFile for Array2<f64> {
        type Error = ReadNpyError;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".npy";
            let item = read_npy(in_file)?;
            Ok(item)
        }
    }

    impl ReadFile for HashMap<String, usize> {
        type Error = std::io::Error;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {
            let in_file = file_path.to_string() + ".txt";
            let f = File::open(in_file)?;
            let item = serde_json::from_reader(f)?;
            return Ok(item)
        }
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for Array2<f64> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".npy";
            write_npy(out, self)?;
            Ok(())
        }
    }

    impl SaveFile for HashMap<String, usize> {
        type Error = std::io::Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".txt";
            let f = File::create(out)?;
            serde_json::to_writer(f, self)?;
            return Ok(())
        }
    }

    impl SaveFile for Vec<String> {
        type Error = std::io::Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {
            let out = output_dir.to_string() + "/" + file_name + ".txt";
            let mut f = BufWriter::new(File::create(out)?);
            for line in self {
                writeln!(f, "{}", line)?;
            }
            f.flush()?;
            return Ok(())
        }
    }

    impl SaveFile for HashMap<(usize, usize), f64> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".csv";
            let mut wrt = csv::WriterBuilder::new().from_path(out)?;
            wrt.write_record(&["Source", "Target", "Prob"])?;

            // rows are sorted by id pair so the artifact is diff friendly
            let mut rows = self.iter().collect::<Vec<(&(usize, usize), &f64)>>();
            rows.sort_by_key(|(k, _v)| **k);

            for ((i, j), v) in rows {
                wrt.serialize((i, j, v))?;
            }
            wrt.flush()?;
            Ok(())
        }
    }

}
