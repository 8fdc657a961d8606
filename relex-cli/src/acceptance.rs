use crate::automata::{read_file, Error};
use crate::{MatchArgs, RelexArgs};

pub fn run(main_args: &RelexArgs, args: &MatchArgs) -> Result<(), Error> {
    let nfa = args.source.load()?;
    let log = |s: &str| {
        if !main_args.no_log {
            eprintln!("{s}")
        }
    };

    for file in &args.files {
        let text = read_file(file)?;
        let mut accepted = 0usize;
        let mut total = 0usize;
        for line in text.lines() {
            total += 1;
            let ok = nfa.accepts(line);
            if ok {
                accepted += 1;
            }
            println!("{} {line}", if ok { "[ OK ]" } else { "[FAIL]" });
        }
        log(&format!(
            "{accepted}/{total} lines accepted in {}",
            file.display()
        ));
    }
    Ok(())
}
