use std::io::{self, BufRead, Write};

use classics::command;
use log::trace;

fn main() -> io::Result<()> {
    env_logger::builder().init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::with_capacity(1024);

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        let nread = stdin
            .lock()
            .read_line(&mut line)
            .inspect_err(|e| eprintln!("error on stdin read {e}"))?;
        if 0 == nread {
            trace!(target: "repl", "stdin: EOF");
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match command::execute(&line) {
            Ok(out) => println!("{out}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
