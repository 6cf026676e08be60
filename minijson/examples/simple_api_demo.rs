// Example demonstrating the simple API

use minijson::{parse, ParseError, Value};

fn main() -> Result<(), ParseError> {
    let inputs = ["null", " true ", "false", "-1.5E-3", "1e400", "0123", "   "];

    for json in inputs {
        print!("Input: {json:?} => ");
        match parse(json) {
            Ok(Value::Number(n)) => println!("Number: {n}"),
            Ok(value) => println!("{}", value.value_type()),
            Err(e) => println!("Error: {e}"),
        }
    }

    // Propagate an error the way a caller would
    let value = parse("3.25")?;
    println!();
    println!("Parsed {} with ? operator", value.number());
    Ok(())
}
