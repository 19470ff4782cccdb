fn main() {
    brewgen::run_cli();
}
