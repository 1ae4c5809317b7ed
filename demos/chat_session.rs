//! Interactive responder session.
//!
//! Run with: cargo run --example chat_session
//! Type "exit" or "quit" to end the session.

use std::io::{self, BufRead, Write};

use sugerir::respond::{Profile, Responder};

fn main() -> io::Result<()> {
    let responder = Responder::new();
    let mut profile = Profile::new().with_specialization("AI");

    println!("Rule-Based Chat Session");
    println!("Type 'exit' or 'quit' to end the conversation.");
    println!("{}", "=".repeat(60));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let mut line = String::new();
        // EOF ends the session as gracefully as the sentinel does
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nChatbot: Session ended. Goodbye!");
            break;
        }

        if Responder::is_exit(&line) {
            println!("\nChatbot: Goodbye! Have a productive day!");
            break;
        }

        let reply = responder.respond(&line, &mut profile);
        println!("Chatbot: {}", reply.text);
    }

    Ok(())
}
