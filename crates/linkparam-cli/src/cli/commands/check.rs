//! `linkparam check` – validate configuration and list parameters.

use linkparam_core::{LinkRewriter, ParameterSpec};

pub fn run_check(rewriter: &LinkRewriter) {
    let config = rewriter.config();
    println!("external links:");
    print_specs(&config.external);
    println!("internal links:");
    print_specs(&config.internal);
}

fn print_specs(specs: &[ParameterSpec]) {
    if specs.is_empty() {
        println!("  (none)");
    }
    for spec in specs {
        match spec {
            ParameterSpec::Static(p) => println!("  {p}"),
            ParameterSpec::Dynamic(p) => println!("  {}=<computed per link>", p.key()),
        }
    }
}
