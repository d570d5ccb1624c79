use algebot::Chatbot;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};
use std::panic::{self, AssertUnwindSafe};

/// Processes one query, mapping any panic out of the pipeline to a generic fallback answer so
/// the loop keeps serving subsequent queries.
fn answer(chatbot: &Chatbot, query: &str) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| chatbot.ask(query))).unwrap_or_else(|_| {
        String::from("An unexpected error occurred. Please simplify your query.")
    })
}

/// Reads one query from the editor and answers it. Returns `Ok(false)` when the user asked to
/// leave.
fn process_line(rl: &mut DefaultEditor, chatbot: &Chatbot) -> Result<bool, ReadlineError> {
    let input = rl.readline("Math Query (or 'quit'): ")?;
    let input = input.trim();

    if input.is_empty() {
        return Ok(true);
    }
    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
        println!("Exiting chatbot. Goodbye.");
        return Ok(false);
    }

    rl.add_history_entry(input)?;
    println!("{}", answer(chatbot, input));
    Ok(true)
}

fn main() {
    let chatbot = Chatbot::new();

    if !io::stdin().is_terminal() {
        // one-shot mode: answer each line of piped input
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            println!("{}", answer(&chatbot, &line));
        }
        return;
    }

    // interactive mode
    let mut rl = DefaultEditor::new().unwrap();

    loop {
        match process_line(&mut rl, &chatbot) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
}
