use crate::automata::{read_file, Error};
use crate::SearchArgs;

pub fn run(args: &SearchArgs) -> Result<(), Error> {
    let nfa = args.source.load()?;
    let text = read_file(&args.file)?;
    let chars: Vec<char> = text.chars().collect();
    for hit in nfa.hits(&text, args.greedy, args.overlap) {
        let excerpt: String = chars[hit.start..hit.start + hit.length].iter().collect();
        println!("{}+{}\t{}", hit.start, hit.length, excerpt.escape_debug());
    }
    Ok(())
}
