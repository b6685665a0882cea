use std::io::{self, BufRead};

use payout_gen_core::distribution::distributor::Distributor;
use payout_gen_core::distribution::round::RoundSettings;
use payout_gen_core::distribution::validator::validate;

/// Interactive loop: one generated round per keypress.
///
/// Reads stdin line by line; an empty line (plain Enter) triggers a new
/// round, 'q' or 'quit' exits. EOF behaves like an exit request.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Default slot cap (20) and default ranges: total 5..=100, attempts 1..=3
    let distributor = Distributor::new();
    let settings = RoundSettings::new();
    log::info!(
        "Generating rounds with totals {:?} over {:?} attempts",
        settings.total_range(),
        settings.part_range()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Press Enter to generate new values. Type 'q' to exit");

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let outcome = distributor.run_round(&settings)?;
        log::debug!("Round outcome: {:?}", outcome);

        // A failed check means the generator itself is broken; treat it as
        // an assertion failure rather than a user-facing error
        if let Err(e) = validate(&outcome.values, outcome.total, outcome.part_count) {
            panic!("Generated an inconsistent round: {e}");
        }

        println!(
            "\nTotal = {}, Attempts = {}.",
            outcome.total, outcome.part_count
        );
        for (i, value) in outcome.values.iter().enumerate() {
            print!("Value[{}] = {}; ", i, value);
        }
        println!("\n");
    }

    Ok(())
}
