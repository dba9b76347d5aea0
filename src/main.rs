use ibm1_trainer::Pipeline;

fn main() {
    Pipeline::run();
}
