fn main() {
    anteplay_cli::logging::init_logging();
    let code = anteplay_cli::run(
        std::env::args(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}
