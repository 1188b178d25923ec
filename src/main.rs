fn main() {
    if let Err(err) = stackdeck::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
