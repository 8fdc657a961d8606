use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;
use rand::prelude::*;
use regex::Regex as LibRegex;
use relex::lexer::Lexer;
use relex::nfa::Nfa;
use relex::parser;

const IDENT: &str = "[a-zA-Z_]\\w*";
const NUMBER: &str = "\\d+";
const COMPILE_PATTERN: &str = "(a|b)*c(d|e)+f?[g-k]\\w*";

lazy_static! {
    static ref HAYSTACK: String = {
        // A deterministic soup of identifiers, numbers and separators
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let words = ["var", "x1", "total_2", "alpha", "42", "1337", "+", "-", " ", "  "];
        (0..2_000)
            .map(|_| *words.choose(&mut rng).unwrap())
            .collect()
    };
    static ref WORD_NFA: Nfa = parser::regex(IDENT).unwrap().to_nfa();
    static ref LEXER: Lexer = {
        let mut lexer = Lexer::new();
        lexer.add(IDENT, "IDENT").unwrap();
        lexer.add(NUMBER, "INT").unwrap();
        lexer.add("\\+", "ADD").unwrap();
        lexer.add("\\-", "SUB").unwrap();
        lexer.add("\\s+", "WS").unwrap();
        lexer
    };
}

pub fn regex_compile(c: &mut Criterion) {
    c.bench_function("relex regex compile", |b| {
        b.iter(|| parser::regex(black_box(COMPILE_PATTERN)).unwrap().to_nfa())
    });

    c.bench_function("library regex compile", |b| {
        b.iter(|| LibRegex::new(black_box(COMPILE_PATTERN)).unwrap())
    });
}

pub fn acceptance(c: &mut Criterion) {
    let nfa = parser::regex("(ab)*(cd)*e?").unwrap().to_nfa();
    c.bench_function("nfa accepts", |b| {
        b.iter(|| nfa.accepts(black_box("abababcdcdcde")))
    });
}

pub fn search(c: &mut Criterion) {
    c.bench_function("nfa search", |b| {
        b.iter(|| WORD_NFA.search(black_box(&HAYSTACK), false, false))
    });

    let oracle = LibRegex::new(IDENT).unwrap();
    c.bench_function("library regex search", |b| {
        b.iter(|| oracle.find_iter(black_box(&HAYSTACK)).count())
    });
}

pub fn lexing(c: &mut Criterion) {
    c.bench_function("lexer tokens", |b| {
        b.iter(|| LEXER.tokens(black_box(&HAYSTACK)).count())
    });
}

criterion_group!(benches, regex_compile, acceptance, search, lexing);
criterion_main!(benches);
