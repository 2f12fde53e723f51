use anatomark::init_logging;

fn main() {
    if let Err(error) = init_logging().and_then(|()| anatomark::cli::run(std::env::args_os())) {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}
