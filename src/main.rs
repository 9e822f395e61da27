fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = fractview::config::Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("fractview {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("fractview {}", env!("CARGO_PKG_VERSION"));
        println!("A GPU fractal explorer: Mandelbrot, Julia, Newton and Nova\n");
        println!("USAGE:");
        println!("    fractview [OPTIONS]\n");
        println!("Settings are read from {}\n", fractview::config::config_path().display());
        println!("OPTIONS:");
        println!("    --print-config    Print the default configuration to stdout");
        println!("    --version, -V     Print version information");
        println!("    --help, -h        Print this help message");
        return;
    }

    if let Err(e) = fractview::app::App::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
