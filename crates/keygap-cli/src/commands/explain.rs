use keygap_enforce::engine::VERSION;
use keygap_enforce::rules;
use keygap_output::OutputFormatter;

/// Run `keygap explain <code>`: print rule documentation.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, code: String) -> i32 {
    match rules::find(&code) {
        Some(rule) => {
            let output = formatter.format_explain(&rule.explain(VERSION));
            if !output.is_empty() {
                println!("{}", output);
            }
            0
        }
        None => {
            if verbose {
                let known: Vec<&str> = rules::ALL_RULES.iter().map(|r| r.name).collect();
                eprintln!("keygap explain: known rules: {}", known.join(", "));
            }
            eprintln!("error: unknown rule or code: {}", code);
            2
        }
    }
}
