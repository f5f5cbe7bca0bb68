use clap::Parser as ClapParser;
use std::{mem, process};

use loxval::{
    InternedStrings, NanBoxed, TaggedValue, Value, ValueArray, ValueRepr, render, values_equal,
};

#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Literals to encode in order: true, false, nil, numbers, anything else is a string
    #[arg(required = true)]
    literals: Vec<String>,

    /// Print the NaN-boxed word of every value and both cell sizes
    #[arg(long)]
    bits: bool,

    /// Compare the elements at indices I and J with language equality
    #[arg(long, num_args = 2, value_names = ["I", "J"])]
    equal: Option<Vec<usize>>,
}

fn parse_literal(literal: &str, strings: &InternedStrings) -> Value {
    match literal {
        "true" => Value::from_bool(true),
        "false" => Value::from_bool(false),
        "nil" => Value::nil(),
        _ => match literal.parse::<f64>() {
            Ok(number) => Value::from_number(number),
            Err(_) => {
                let text = literal.trim_matches('"');
                Value::from_object(strings.intern(text))
            }
        },
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let strings = InternedStrings::new();
    let mut values: ValueArray = ValueArray::new();
    for literal in &cli.literals {
        values.append(parse_literal(literal, &strings));
    }
    log::debug!(
        "encoded {} values, capacity {}",
        values.len(),
        values.capacity()
    );

    for (index, value) in values.iter().enumerate() {
        let text = render(*value, &strings);
        if cli.bits {
            let word = NanBoxed::pack(value.unpack());
            println!(
                "[{:02}] {:<6} {:<20} {:#018x}",
                index,
                value.kind(),
                text,
                word.to_bits()
            );
        } else {
            println!("[{:02}] {:<6} {}", index, value.kind(), text);
        }
    }

    if cli.bits {
        println!(
            "cell sizes: compact {} bytes, explicit {} bytes",
            mem::size_of::<NanBoxed>(),
            mem::size_of::<TaggedValue>()
        );
    }

    if let Some(pair) = cli.equal {
        let (a, b) = match (values.get(pair[0]), values.get(pair[1])) {
            (Ok(a), Ok(b)) => (a, b),
            (Err(err), _) | (_, Err(err)) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        };
        println!(
            "{} == {}: {}",
            render(a, &strings),
            render(b, &strings),
            values_equal(a, b)
        );
    }
}
