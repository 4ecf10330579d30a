//! tourdesk main entrypoint.

use tourdesk::run;
use tourdesk::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
