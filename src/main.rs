//! rTimebank main entrypoint.

use rtimebank::run;
use rtimebank::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
