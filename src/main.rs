//! discountbot main entrypoint.

use discountbot::run;

fn main() {
    if let Err(e) = run() {
        discountbot::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
