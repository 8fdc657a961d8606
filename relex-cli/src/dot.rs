use crate::automata::Error;
use crate::DotArgs;
use std::fs;

pub fn run(args: &DotArgs) -> Result<(), Error> {
    let nfa = args.source.load()?;
    let graph = nfa.to_dot();
    match &args.output {
        Some(path) => {
            fs::write(path, graph).map_err(|e| Error::File(path.clone(), e))?;
        }
        None => print!("{graph}"),
    }
    Ok(())
}
