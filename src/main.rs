//! rpresence main entrypoint.

use env_logger::Env;
use rpresence::run;
use rpresence::ui::messages::error;

fn main() {
    env_logger::init_from_env(Env::new().default_filter_or("warn"));

    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
