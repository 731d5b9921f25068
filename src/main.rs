use anyhow::{anyhow, Context, Result};
use regex::Regex;
use sorted_list::{IntoValue, ListError, Order, SortedList, Value};
use std::{env, process};
use tracing_subscriber::EnvFilter;

/*
 * A value token as typed on the command line
 */
#[derive(Debug, Clone, PartialEq)]
enum Literal {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

/*
 * Floats and booleans are parsed so the list itself gets to refuse them
 */
impl IntoValue for Literal {
    fn into_value(self) -> Result<Value, ListError> {
        match self {
            Literal::Integer(n) => n.into_value(),
            Literal::Float(x) => x.into_value(),
            Literal::Bool(b) => b.into_value(),
            Literal::Text(s) => s.into_value(),
        }
    }
}

struct LiteralParser {
    re: Regex,
}

impl LiteralParser {
    fn new() -> Result<Self> {
        let re = Regex::new(
            r#"^(?:(?P<int>[+-]?\d+)|(?P<float>[+-]?(?:\d+\.\d*|\.\d+|\d+)(?:[eE][+-]?\d+)?)|(?P<bool>true|false)|"(?P<quoted>.*)")$"#,
        )?;
        Ok(LiteralParser { re })
    }

    /*
     * Classify one token :
     * - integer : 42, -7
     * - float : 1.5, 2e10
     * - boolean : true, false
     * - quoted text : "10" (quotes stripped)
     * - anything else is text as typed
     */
    fn parse(&self, token: &str) -> Result<Literal> {
        let Some(captures) = self.re.captures(token) else {
            return Ok(Literal::Text(token.to_owned()));
        };
        if let Some(int) = captures.name("int") {
            let n = int
                .as_str()
                .parse::<i64>()
                .with_context(|| format!("Integer literal out of range: {}", token))?;
            return Ok(Literal::Integer(n));
        }
        if let Some(float) = captures.name("float") {
            return Ok(Literal::Float(float.as_str().parse::<f64>()?));
        }
        if let Some(b) = captures.name("bool") {
            return Ok(Literal::Bool(b.as_str() == "true"));
        }
        let quoted = captures
            .name("quoted")
            .ok_or(anyhow!("Failed to parse literal {}", token))?;
        Ok(Literal::Text(quoted.as_str().to_owned()))
    }
}

fn print_list(list: &SortedList) {
    println!("{} ({} values, {})", list, list.len(), list.order());
}

/*
 * Walk through the list operations with an integer and a text list
 */
fn demo() -> Result<()> {
    let mut list = SortedList::new(Order::Ascending);
    for n in [10, 2, 7, 1] {
        list.add(n)?;
    }
    print_list(&list);

    for value in &list {
        println!("{}", value);
    }

    println!("contains 7 : {}", list.contains(7)?);
    println!("remove 23 : {}", list.remove_by_value(23)?);
    print_list(&list);

    let mut list = SortedList::new(Order::Descending);
    for s in ["A", "B", "C"] {
        list.add(s)?;
    }
    println!("first : {}", list.first()?);
    println!("last : {}", list.last()?);
    print_list(&list);

    Ok(())
}

fn build(order: &str, tokens: impl Iterator<Item = String>) -> Result<SortedList> {
    let order: Order = order.parse()?;
    let parser = LiteralParser::new()?;
    let mut list = SortedList::new(order);
    for token in tokens {
        let literal = parser.parse(&token)?;
        list.add(literal)
            .with_context(|| format!("Failed to add {}", token))?;
    }
    Ok(list)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "sorted-list".to_owned());
    let Some(order) = args.next() else {
        return demo();
    };
    if args.len() == 0 {
        println!("Usage : {} [asc|desc] [value]...", program);
        process::exit(1);
    }

    let list = build(&order, args).context("Failed to build list")?;
    print_list(&list);
    println!("first : {}", list.first()?);
    println!("last : {}", list.last()?);

    Ok(())
}
