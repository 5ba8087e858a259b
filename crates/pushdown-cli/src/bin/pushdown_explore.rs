// pushdown-explore: interactively drive one DPDA run.
//
// Loads a JSON automaton definition and then reads one input symbol per
// line from stdin. An empty line applies an epsilon move. After every
// attempt the current configuration and the legal next inputs are printed;
// a failed step leaves the configuration unchanged and prints the error,
// which already names the legal alternatives.
//
// Usage:
//   pushdown-explore DEFINITION.json
//
// Commands:
//   <symbol>    Apply one transition on <symbol>
//   (empty)     Apply an epsilon move
//   :quit       Exit

use std::io::{self, BufRead, Write};

use pushdown_sim::Stepper;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if pushdown_cli::wants_help(&args) || args.is_empty() {
        println!("pushdown-explore: interactively drive one DPDA run.");
        println!();
        println!("Usage: pushdown-explore DEFINITION.json");
        println!();
        println!("Reads one input symbol per line from stdin.");
        println!("An empty line applies an epsilon move; :quit exits.");
        return;
    }

    let dpda = pushdown_cli::load_dpda(&args[0]).unwrap_or_else(|e| pushdown_cli::fatal(&e));
    let mut stepper = dpda.stepper();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    print_status(&mut out, &stepper);
    let _ = out.flush();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let symbol = line.trim();
        if symbol == ":quit" {
            break;
        }

        if let Err(e) = stepper.step(symbol) {
            let _ = writeln!(out, "E: {e}");
        }
        print_status(&mut out, &stepper);
        let _ = out.flush();
    }
}

fn print_status(out: &mut impl Write, stepper: &Stepper<'_>) {
    let (state, stack) = stepper.configuration();
    let marker = if stepper.is_accepting() { "  (accepting)" } else { "" };
    let _ = writeln!(out, "state: {state}{marker}");
    let _ = writeln!(out, "stack (bottom to top): [{}]", stack.join(" "));

    let legal: Vec<&str> = stepper
        .legal_inputs()
        .into_iter()
        .map(|s| if s.is_empty() { "(epsilon)" } else { s })
        .collect();
    let _ = writeln!(out, "legal: {}", legal.join(" "));
}
