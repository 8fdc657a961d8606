use crate::automata::{read_file, Error};
use crate::{LexArgs, RelexArgs};
use relex::lexer::Lexer;

pub fn run(main_args: &RelexArgs, args: &LexArgs) -> Result<(), Error> {
    let lexicon = read_file(&args.lexicon)?;
    let mut lexer = Lexer::new();
    lexer.load(&lexicon)?;
    if !main_args.no_log {
        eprintln!("Loaded {} pattern(s) from {}", lexer.len(), args.lexicon.display());
    }

    let text = read_file(&args.file)?;
    let mut tokens = lexer.tokens(&text);
    for token in tokens.by_ref() {
        println!("{}@{}\t{}", token.name, token.start, token.lexeme.escape_debug());
    }
    if !tokens.rest().is_empty() {
        let excerpt: String = tokens.rest().chars().take(16).collect();
        return Err(Error::Stuck(excerpt));
    }
    Ok(())
}
