fn main() {
    holdem_advisor::cli::run_preflop();
}
