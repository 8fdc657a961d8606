use crate::automata::{read_file, Error};
use crate::FmtArgs;
use relex::nfa::Nfa;
use relex::parser;

pub fn run(args: &FmtArgs) -> Result<(), Error> {
    let text = read_file(&args.file)?;
    let nfa: Nfa = parser::nfa(&text)?.try_into()?;
    print!("{}", nfa.to_description());
    Ok(())
}
