//! TimeToWIN main entrypoint.

use timetowin::run;
use timetowin::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
