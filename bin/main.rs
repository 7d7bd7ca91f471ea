// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use std::process::ExitCode;

use time_input::{Node, Precision, TimeInput, TimeInputProps, TimeValue};
use tracing_subscriber::EnvFilter;

/// Usage: `time_input [VALUE] [LOCALE] [PRECISION] [FORMAT]`
///
/// Prints the fields a time input would draw for `VALUE`.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("time_input: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), time_input::TimeInputError> {
    let mut props = TimeInputProps::default();
    if let Some(value) = args.first().filter(|v| !v.is_empty()) {
        props = props.with_value(TimeValue::parse(value)?);
    }
    if let Some(locale) = args.get(1) {
        props = props.with_locale(locale.as_str());
    }
    if let Some(precision) = args.get(2) {
        props = props.with_max_detail(precision.parse::<Precision>()?);
    }
    if let Some(format) = args.get(3) {
        props = props.with_format(format.as_str());
    }

    let input = TimeInput::new(props)?;
    println!("placeholder: {}", input.placeholder());
    let rendered = input.render();
    for node in &rendered.nodes {
        match node {
            Node::Divider { text, .. } | Node::Literal(text) => println!("  {text:?}"),
            Node::LeadingZero { .. } => println!("  0"),
            Node::Number(field) => println!(
                "  {:<6} {:>2} ({}..={})",
                field.name.as_str(),
                field.value,
                field.min,
                field.max
            ),
            Node::Select(select) => println!(
                "  {:<6} {}",
                "amPm",
                select.value.map(|v| v.as_str()).unwrap_or("--")
            ),
        }
    }
    println!("native: {} = {:?}", rendered.native.name, rendered.native.value);
    Ok(())
}
