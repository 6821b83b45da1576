use std::io;

fn main() {
    holobac_session::init_logging();
    let code = holobac_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
